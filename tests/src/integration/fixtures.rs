//! Shared fixtures: a temporary node home with a realistic genesis file.

use std::fs;
use std::path::{Path, PathBuf};

use qc_18_genesis_accounts::{
    AuthGenesisState, BankGenesisState, DirectoryKeyring, GenesisAccountService,
    GenesisAccountsConfig, GenesisDocument, GenesisFile, KeyInfo, KeyringBackend,
};
use serde_json::json;
use shared_types::Address;
use tempfile::TempDir;

/// Address of the account already present in the fixture genesis.
pub const EXISTING: u8 = 200;

/// Balance of [`EXISTING`] in the fixture genesis.
pub const EXISTING_BALANCE: &str = "500stake";

/// Deterministic test address with the default prefix.
pub fn addr(n: u8) -> Address {
    Address::from_bytes("qc", &[n; 20]).unwrap()
}

/// Genesis document with one funded account and several untouched modules.
pub fn genesis_fixture() -> Vec<u8> {
    let doc = json!({
        "genesis_time": "2024-06-01T00:00:00Z",
        "chain_id": "quantum-chain-devnet",
        "initial_height": "1",
        "consensus_params": {
            "block": {"max_bytes": "22020096", "max_gas": "-1"},
            "evidence": {"max_age_num_blocks": "100000", "max_age_duration": "172800s"},
            "validator": {"pub_key_types": ["ed25519"]}
        },
        "app_hash": "",
        "app_state": {
            "auth": {
                "params": {
                    "max_memo_characters": "256",
                    "tx_sig_limit": "7",
                    "tx_size_cost_per_byte": "10"
                },
                "accounts": [{
                    "@type": "/cosmos.auth.v1beta1.BaseAccount",
                    "address": addr(EXISTING).to_string(),
                    "pub_key": null,
                    "account_number": "0",
                    "sequence": "0"
                }]
            },
            "bank": {
                "params": {"send_enabled": [], "default_send_enabled": true},
                "balances": [{
                    "address": addr(EXISTING).to_string(),
                    "coins": [{"denom": "stake", "amount": "500"}]
                }],
                "supply": [{"denom": "stake", "amount": "500"}],
                "denom_metadata": []
            },
            "crisis": {"constant_fee": {"denom": "stake", "amount": "1000"}},
            "gov": {
                "starting_proposal_id": "1",
                "deposits": [],
                "votes": [],
                "proposals": []
            },
            "staking": {
                "params": {
                    "unbonding_time": "1814400s",
                    "max_validators": 100,
                    "bond_denom": "stake"
                },
                "validators": []
            }
        }
    });
    serde_json::to_vec_pretty(&doc).unwrap()
}

/// A node home in a temporary directory.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    /// Home with `config/genesis.json` set to [`genesis_fixture`].
    pub fn new() -> Self {
        let home = Self::empty();
        home.write_genesis(&genesis_fixture());
        home
    }

    /// Home with an empty `config/` directory and no genesis file.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn genesis_path(&self) -> PathBuf {
        GenesisAccountsConfig::for_testing().genesis_path(self.path())
    }

    pub fn write_genesis(&self, bytes: &[u8]) {
        fs::write(self.genesis_path(), bytes).unwrap();
    }

    pub fn genesis_bytes(&self) -> Vec<u8> {
        fs::read(self.genesis_path()).unwrap()
    }

    /// Store a key in this home's `test` keyring.
    pub fn add_test_key(&self, alias: &str, address: &Address) {
        add_key(self.path(), alias, address);
    }

    /// Service over this home's genesis file and `test` keyring.
    pub fn service(&self) -> GenesisAccountService<DirectoryKeyring, GenesisFile> {
        self.service_with_backend(KeyringBackend::Test)
    }

    pub fn service_with_backend(
        &self,
        backend: KeyringBackend,
    ) -> GenesisAccountService<DirectoryKeyring, GenesisFile> {
        GenesisAccountService::new(
            GenesisAccountsConfig::for_testing(),
            DirectoryKeyring::open(self.path(), backend),
            GenesisFile::new(self.genesis_path()),
        )
    }
}

/// Store a key in the `test` keyring under `keyring_dir`.
pub fn add_key(keyring_dir: &Path, alias: &str, address: &Address) {
    DirectoryKeyring::open(keyring_dir, KeyringBackend::Test)
        .add_key(&KeyInfo::new(alias, address.clone()))
        .unwrap();
}

pub fn parse(bytes: &[u8]) -> GenesisDocument {
    GenesisDocument::from_slice(bytes).unwrap()
}

pub fn auth_state(bytes: &[u8]) -> AuthGenesisState {
    let doc = parse(bytes);
    AuthGenesisState::from_json(doc.app_state().module_json("auth").unwrap().unwrap()).unwrap()
}

pub fn bank_state(bytes: &[u8]) -> BankGenesisState {
    let doc = parse(bytes);
    BankGenesisState::from_json(doc.app_state().module_json("bank").unwrap().unwrap()).unwrap()
}

/// Raw JSON text of an untouched `app_state` module.
pub fn module_raw(bytes: &[u8], module: &str) -> String {
    parse(bytes)
        .app_state()
        .raw(module)
        .unwrap_or_else(|| panic!("module {} missing or decoded", module))
        .to_string()
}

/// Raw JSON text of a top-level field.
pub fn field_raw(bytes: &[u8], key: &str) -> String {
    parse(bytes)
        .raw_field(key)
        .unwrap_or_else(|| panic!("field {} missing", key))
        .to_string()
}
