//! # Command-Line Flows
//!
//! `qc-genesis add-genesis-account` driven through [`qc_genesis::run`] with
//! parsed arguments, as the binary does.

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;
    use qc_18_genesis_accounts::{ErrorKind, GenesisAccountError, VestingKind};
    use qc_genesis::lock::{HomeLock, LockError};
    use qc_genesis::Cli;
    use shared_types::Coins;
    use tempfile::TempDir;

    use crate::integration::fixtures::*;

    fn run(home: &Path, args: &[&str]) -> anyhow::Result<()> {
        let home = home.to_string_lossy().into_owned();
        let mut argv = vec!["qc-genesis", "--home", home.as_str(), "add-genesis-account"];
        argv.extend_from_slice(args);
        qc_genesis::run(Cli::try_parse_from(argv)?)
    }

    #[test]
    fn test_add_literal_address() {
        let home = TestHome::new();
        let address = addr(1).to_string();

        run(home.path(), &[address.as_str(), "1000stake", "--keyring-backend", "test"]).unwrap();

        let bank = bank_state(&home.genesis_bytes());
        assert_eq!(bank.supply, Coins::parse("1500stake").unwrap());
        assert!(HomeLock::acquire(&home.path().join("config")).is_ok());
    }

    #[test]
    fn test_add_key_name_with_vesting() {
        let home = TestHome::new();
        home.add_test_key("validator", &addr(2));

        run(
            home.path(),
            &[
                "validator",
                "1000stake",
                "--keyring-backend",
                "test",
                "--vesting-amount",
                "250stake",
                "--vesting-end-time",
                "1700000000",
            ],
        )
        .unwrap();

        let auth = auth_state(&home.genesis_bytes());
        let added = auth
            .accounts
            .iter()
            .find(|a| a.address() == &addr(2))
            .unwrap();
        assert_eq!(added.vesting_kind(), VestingKind::Delayed);
    }

    #[test]
    fn test_vesting_error_reported() {
        let home = TestHome::new();
        let before = home.genesis_bytes();
        let address = addr(3).to_string();

        let err = run(
            home.path(),
            &[
                address.as_str(),
                "1000stake",
                "--vesting-amount",
                "2000stake",
                "--vesting-start-time",
                "50",
                "--vesting-end-time",
                "100",
            ],
        )
        .unwrap_err();

        let cause = err.downcast_ref::<GenesisAccountError>().unwrap();
        assert_eq!(cause.kind(), ErrorKind::VestingAmountExceedsBalance);
        let message = format!("{:#}", err);
        assert!(message.starts_with("failed to add genesis account"));
        assert!(message.contains("vesting amount cannot be greater than total amount"));
        assert_eq!(home.genesis_bytes(), before);
    }

    #[test]
    fn test_home_client_keyring() {
        let home = TestHome::new();
        let client = TempDir::new().unwrap();
        add_key(client.path(), "operator", &addr(4));
        let client_dir = client.path().to_string_lossy().into_owned();

        // Not in the node home's keyring
        let err = run(
            home.path(),
            &["operator", "1stake", "--keyring-backend", "test"],
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<GenesisAccountError>().unwrap().kind(),
            ErrorKind::AddressResolution
        );

        run(
            home.path(),
            &[
                "operator",
                "1stake",
                "--keyring-backend",
                "test",
                "--home-client",
                client_dir.as_str(),
            ],
        )
        .unwrap();

        let auth = auth_state(&home.genesis_bytes());
        assert!(auth.accounts.iter().any(|a| a.address() == &addr(4)));
    }

    #[test]
    fn test_held_lock_blocks_command() {
        let home = TestHome::new();
        let before = home.genesis_bytes();
        let _held = HomeLock::acquire(&home.path().join("config")).unwrap();
        let address = addr(5).to_string();

        let err = run(home.path(), &[address.as_str(), "1stake"]).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<LockError>(),
            Some(LockError::AlreadyLocked { .. })
        ));
        assert_eq!(home.genesis_bytes(), before);
    }

    #[test]
    fn test_negative_time_rejected_by_parser() {
        let address = addr(6).to_string();
        let parsed = Cli::try_parse_from([
            "qc-genesis",
            "add-genesis-account",
            address.as_str(),
            "1stake",
            "--vesting-end-time=-5",
        ]);
        assert!(parsed.is_err());
    }
}
