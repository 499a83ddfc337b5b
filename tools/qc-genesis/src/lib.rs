//! # qc-genesis
//!
//! Offline genesis construction for Quantum-Chain.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `add-genesis-account` | Add an account (optionally vesting) and its balance |
//!
//! The binary installs logging and calls [`run`]; tests call [`run`] directly.

pub mod cli;
pub mod commands;
pub mod lock;

use std::path::PathBuf;

use anyhow::{bail, Result};
use qc_18_genesis_accounts::GenesisAccountsConfig;

pub use cli::{AddGenesisAccountArgs, Cli, Command};

/// Default home directory name under `$HOME`.
pub const DEFAULT_HOME_DIR: &str = ".quantum-chain";

/// `--home` if given (clap also reads `QC_HOME`), else `$HOME/.quantum-chain`.
pub fn resolve_home(home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = home {
        return Ok(home);
    }
    match std::env::var_os("HOME") {
        Some(user_home) if !user_home.is_empty() => {
            Ok(PathBuf::from(user_home).join(DEFAULT_HOME_DIR))
        }
        _ => bail!("cannot determine home directory; pass --home or set QC_HOME"),
    }
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let home = resolve_home(cli.home)?;
    let config = GenesisAccountsConfig::from_env();

    match cli.command {
        Command::AddGenesisAccount(args) => {
            commands::add_genesis_account::execute(&home, &args, config)?;
        }
    }
    Ok(())
}
