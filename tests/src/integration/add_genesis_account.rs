//! # Add Genesis Account Flows
//!
//! `GenesisAccountService` against real genesis files and a directory
//! keyring.
//!
//! ## Invariants Checked
//!
//! - Account registry and balance ledger change together or not at all
//! - Supply equals the previous supply plus the new balance
//! - Modules other than `auth` and `bank` are written back byte-for-byte

#[cfg(test)]
mod tests {
    use qc_18_genesis_accounts::{
        AddGenesisAccountRequest, ErrorKind, GenesisAccount, GenesisAccountApi,
        GenesisAccountError, GenesisStage, KeyringBackend, VestingKind,
    };
    use shared_types::Coins;

    use crate::integration::fixtures::*;

    fn coins(s: &str) -> Coins {
        Coins::parse(s).unwrap()
    }

    // =========================================================================
    // SCENARIOS
    // =========================================================================

    #[test]
    fn test_scenario_a_plain_account() {
        let home = TestHome::new();
        let report = home
            .service()
            .add_genesis_account(&AddGenesisAccountRequest::new(addr(1).as_str(), "1000stake"))
            .unwrap();

        assert_eq!(report.address, addr(1));
        assert_eq!(report.kind, VestingKind::None);
        assert_eq!(report.total_accounts, 2);

        let bytes = home.genesis_bytes();
        let auth = auth_state(&bytes);
        let added = auth
            .accounts
            .iter()
            .find(|a| a.address() == &addr(1))
            .unwrap();
        match added {
            GenesisAccount::Base(base) => {
                assert!(base.pub_key.is_none());
                assert_eq!(base.account_number, 0);
                assert_eq!(base.sequence, 0);
            }
            other => panic!("expected base account, got {:?}", other),
        }

        let bank = bank_state(&bytes);
        let balance = bank.balances.iter().find(|b| b.address == addr(1)).unwrap();
        assert_eq!(balance.coins, coins("1000stake"));
        assert_eq!(bank.supply, coins("1500stake"));
    }

    #[test]
    fn test_scenario_b_continuous_vesting() {
        let home = TestHome::new();
        let report = home
            .service()
            .add_genesis_account(
                &AddGenesisAccountRequest::new(addr(2).as_str(), "1000stake")
                    .with_vesting("200stake", 50, 100),
            )
            .unwrap();
        assert_eq!(report.kind, VestingKind::Continuous);

        let auth = auth_state(&home.genesis_bytes());
        let added = auth
            .accounts
            .iter()
            .find(|a| a.address() == &addr(2))
            .unwrap();
        match added {
            GenesisAccount::ContinuousVesting(account) => {
                assert_eq!(account.start_time, 50);
                assert_eq!(account.base_vesting_account.end_time, 100);
                assert_eq!(
                    account.base_vesting_account.original_vesting,
                    coins("200stake")
                );
            }
            other => panic!("expected continuous vesting account, got {:?}", other),
        }
    }

    #[test]
    fn test_scenario_c_vesting_exceeds_balance() {
        let home = TestHome::new();
        let before = home.genesis_bytes();

        let err = home
            .service()
            .add_genesis_account(
                &AddGenesisAccountRequest::new(addr(3).as_str(), "1000stake")
                    .with_vesting("2000stake", 50, 100),
            )
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::VestingAmountExceedsBalance);
        assert_eq!(
            err.to_string(),
            "vesting amount cannot be greater than total amount"
        );
        assert_eq!(home.genesis_bytes(), before);
    }

    #[test]
    fn test_scenario_d_unknown_alias() {
        let home = TestHome::new();
        let before = home.genesis_bytes();

        let err = home
            .service()
            .add_genesis_account(&AddGenesisAccountRequest::new("unknown-key", "1000stake"))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::AddressResolution);
        assert_eq!(home.genesis_bytes(), before);
    }

    // =========================================================================
    // RESOLUTION
    // =========================================================================

    #[test]
    fn test_alias_from_test_keyring() {
        let home = TestHome::new();
        home.add_test_key("validator", &addr(4));

        let report = home
            .service()
            .add_genesis_account(&AddGenesisAccountRequest::new("validator", "10stake"))
            .unwrap();
        assert_eq!(report.address, addr(4));
    }

    #[test]
    fn test_os_backend_accepts_literal_address() {
        let home = TestHome::new();
        let service = home.service_with_backend(KeyringBackend::Os);

        assert!(service
            .add_genesis_account(&AddGenesisAccountRequest::new(addr(5).as_str(), "10stake"))
            .is_ok());

        let err = service
            .add_genesis_account(&AddGenesisAccountRequest::new("validator", "10stake"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AddressResolution);
    }

    // =========================================================================
    // INVARIANTS
    // =========================================================================

    #[test]
    fn test_duplicate_leaves_file_unchanged() {
        let home = TestHome::new();
        let before = home.genesis_bytes();

        let err = home
            .service()
            .add_genesis_account(&AddGenesisAccountRequest::new(
                addr(EXISTING).as_str(),
                "1stake",
            ))
            .unwrap_err();

        assert!(
            matches!(err, GenesisAccountError::DuplicateAccount(ref a) if *a == addr(EXISTING))
        );
        assert!(err
            .to_string()
            .starts_with("cannot add account at existing address"));
        assert_eq!(home.genesis_bytes(), before);
    }

    #[test]
    fn test_duplicate_via_alias_rejected() {
        let home = TestHome::new();
        home.add_test_key("genesis-validator", &addr(EXISTING));

        let err = home
            .service()
            .add_genesis_account(&AddGenesisAccountRequest::new("genesis-validator", "1stake"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateAccount);
    }

    #[test]
    fn test_supply_conservation() {
        let home = TestHome::new();
        let service = home.service();

        let additions = [(10, "100stake"), (11, "5atom,7stake"), (12, "1atom")];
        for (n, amount) in additions {
            service
                .add_genesis_account(&AddGenesisAccountRequest::new(addr(n).as_str(), amount))
                .unwrap();
        }

        let bank = bank_state(&home.genesis_bytes());
        let summed = bank
            .balances
            .iter()
            .try_fold(Coins::empty(), |acc, b| acc.checked_add(&b.coins))
            .unwrap();

        assert_eq!(bank.supply, summed);
        assert_eq!(bank.supply, coins("6atom,607stake"));
        assert!(bank.balances.windows(2).all(|w| w[0].address < w[1].address));
    }

    #[test]
    fn test_registry_sorted_after_adds() {
        let home = TestHome::new();
        let service = home.service();
        for n in [250, 7, 100] {
            service
                .add_genesis_account(&AddGenesisAccountRequest::new(addr(n).as_str(), "1stake"))
                .unwrap();
        }

        let auth = auth_state(&home.genesis_bytes());
        let order: Vec<_> = auth.accounts.iter().map(|a| a.address().clone()).collect();
        assert_eq!(order, vec![addr(7), addr(100), addr(EXISTING), addr(250)]);
    }

    #[test]
    fn test_other_modules_byte_identical() {
        let home = TestHome::new();
        let before = home.genesis_bytes();

        home.service()
            .add_genesis_account(
                &AddGenesisAccountRequest::new(addr(6).as_str(), "1000stake")
                    .with_vesting("400stake", 0, 1_700_000_000),
            )
            .unwrap();
        let after = home.genesis_bytes();

        for module in ["crisis", "gov", "staking"] {
            assert_eq!(module_raw(&after, module), module_raw(&before, module));
        }
        let fields = [
            "genesis_time",
            "chain_id",
            "initial_height",
            "consensus_params",
            "app_hash",
        ];
        for field in fields {
            assert_eq!(field_raw(&after, field), field_raw(&before, field));
        }
    }

    #[test]
    fn test_auth_and_bank_passthrough_fields_kept() {
        let home = TestHome::new();
        home.service()
            .add_genesis_account(&AddGenesisAccountRequest::new(addr(8).as_str(), "1stake"))
            .unwrap();

        let after: serde_json::Value = serde_json::from_slice(&home.genesis_bytes()).unwrap();
        assert_eq!(after["app_state"]["auth"]["params"]["tx_sig_limit"], "7");
        assert_eq!(after["app_state"]["bank"]["denom_metadata"], serde_json::json!([]));
        assert_eq!(
            after["app_state"]["bank"]["params"]["default_send_enabled"],
            true
        );
    }

    // =========================================================================
    // FAILURES
    // =========================================================================

    #[test]
    fn test_start_without_end_rejected() {
        let home = TestHome::new();
        let before = home.genesis_bytes();

        let err = home
            .service()
            .add_genesis_account(
                &AddGenesisAccountRequest::new(addr(9).as_str(), "1000stake")
                    .with_vesting("10stake", 50, 0),
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::VestingParams);
        assert_eq!(home.genesis_bytes(), before);
    }

    #[test]
    fn test_malformed_coins_rejected() {
        let home = TestHome::new();
        let err = home
            .service()
            .add_genesis_account(&AddGenesisAccountRequest::new(addr(9).as_str(), "ten stake"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CoinParse);
    }

    #[test]
    fn test_missing_genesis_file() {
        let home = TestHome::empty();
        let err = home
            .service()
            .add_genesis_account(&AddGenesisAccountRequest::new(addr(1).as_str(), "1stake"))
            .unwrap_err();

        assert!(matches!(
            err,
            GenesisAccountError::GenesisLoad {
                stage: GenesisStage::Read,
                ..
            }
        ));
        assert!(!home.genesis_path().exists());
    }

    #[test]
    fn test_malformed_genesis_file() {
        let home = TestHome::empty();
        home.write_genesis(b"{\"app_state\": ");

        let err = home
            .service()
            .add_genesis_account(&AddGenesisAccountRequest::new(addr(1).as_str(), "1stake"))
            .unwrap_err();
        assert!(matches!(
            err,
            GenesisAccountError::GenesisLoad {
                stage: GenesisStage::ParseDocument,
                ..
            }
        ));
        assert_eq!(home.genesis_bytes(), b"{\"app_state\": ");
    }

    #[test]
    fn test_genesis_without_chain_id() {
        let home = TestHome::empty();
        let doc = br#"{"app_state": {"auth": {"accounts": []}, "bank": {"balances": []}}}"#;
        home.write_genesis(doc);

        let err = home
            .service()
            .add_genesis_account(&AddGenesisAccountRequest::new(addr(1).as_str(), "1stake"))
            .unwrap_err();
        assert!(matches!(
            err,
            GenesisAccountError::GenesisLoad {
                stage: GenesisStage::ParseDocument,
                ..
            }
        ));
        assert_eq!(home.genesis_bytes(), doc);
    }

    #[test]
    fn test_genesis_without_auth_and_bank() {
        let home = TestHome::empty();
        home.write_genesis(br#"{"chain_id": "quantum-chain-devnet", "app_state": {"gov": {}}}"#);

        let report = home
            .service()
            .add_genesis_account(&AddGenesisAccountRequest::new(addr(1).as_str(), "1000stake"))
            .unwrap();
        assert_eq!(report.total_accounts, 1);

        let bytes = home.genesis_bytes();
        assert_eq!(module_raw(&bytes, "gov"), "{}");
        assert_eq!(auth_state(&bytes).accounts.len(), 1);
        assert_eq!(bank_state(&bytes).supply, coins("1000stake"));
    }
}
