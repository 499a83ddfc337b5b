//! `add-genesis-account`: add one account and its balance to genesis.json.

use std::path::Path;

use anyhow::{Context, Result};
use qc_18_genesis_accounts::{
    AddGenesisAccountReport, AddGenesisAccountRequest, DirectoryKeyring, GenesisAccountApi,
    GenesisAccountService, GenesisAccountsConfig, GenesisFile,
};
use quantum_telemetry::{log_event, subsystem_span};

use crate::cli::AddGenesisAccountArgs;
use crate::lock::HomeLock;

/// Run the command against `home`.
pub fn execute(
    home: &Path,
    args: &AddGenesisAccountArgs,
    config: GenesisAccountsConfig,
) -> Result<AddGenesisAccountReport> {
    let _span = subsystem_span!("add_genesis_account", subsystem = "qc-genesis").entered();

    let genesis_path = config.genesis_path(home);
    let genesis_dir = genesis_path
        .parent()
        .with_context(|| format!("invalid genesis path {}", genesis_path.display()))?;
    let _lock = HomeLock::acquire(genesis_dir)
        .with_context(|| format!("failed to lock {}", genesis_dir.display()))?;

    let keyring_dir = args.home_client.as_deref().unwrap_or(home);
    let keys = DirectoryKeyring::open(keyring_dir, args.keyring_backend);
    log_event!(
        debug,
        "qc-genesis",
        "Opened keyring",
        backend = %args.keyring_backend,
        dir = %keys.dir().display()
    );

    let service = GenesisAccountService::new(config, keys, GenesisFile::new(&genesis_path));
    let request = AddGenesisAccountRequest::new(&args.address_or_key_name, &args.coins)
        .with_vesting(
            &args.vesting_amount,
            args.vesting_start_time,
            args.vesting_end_time,
        );

    let report = service.add_genesis_account(&request).with_context(|| {
        format!(
            "failed to add genesis account {:?} to {}",
            args.address_or_key_name,
            genesis_path.display()
        )
    })?;

    log_event!(
        info,
        "qc-genesis",
        "Genesis account added",
        address = %report.address,
        vesting = %report.kind,
        supply = %report.supply,
        accounts = report.total_accounts
    );
    Ok(report)
}
