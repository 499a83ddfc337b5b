//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use qc_18_genesis_accounts::KeyringBackend;

/// qc-genesis: offline genesis construction for Quantum-Chain
#[derive(Parser, Debug)]
#[command(name = "qc-genesis", version)]
#[command(about = "Build the initial state document of a Quantum-Chain network")]
pub struct Cli {
    /// Node home directory [default: $HOME/.quantum-chain]
    #[arg(long, global = true, env = "QC_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Log filter, overrides QC_LOG_LEVEL (RUST_LOG still wins)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a genesis account to genesis.json
    ///
    /// The account may be given as a bech32 address or as the name of a key
    /// in the keyring. With --vesting-amount the account is created as a
    /// vesting account: continuous when both start and end time are set,
    /// delayed when only the end time is set.
    AddGenesisAccount(AddGenesisAccountArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AddGenesisAccountArgs {
    /// Bech32 address or key name
    pub address_or_key_name: String,

    /// Initial balance, e.g. 1000stake,10atom
    pub coins: String,

    /// Keyring backend (os|file|test)
    #[arg(long, value_name = "BACKEND", default_value_t = KeyringBackend::Os)]
    pub keyring_backend: KeyringBackend,

    /// Keyring directory [default: --home]
    #[arg(long, value_name = "DIR")]
    pub home_client: Option<PathBuf>,

    /// Amount of coins subject to vesting
    #[arg(long, value_name = "COINS", default_value = "")]
    pub vesting_amount: String,

    /// Vesting start, unix seconds
    #[arg(long, value_name = "UNIX", default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..))]
    pub vesting_start_time: i64,

    /// Vesting end, unix seconds
    #[arg(long, value_name = "UNIX", default_value_t = 0, value_parser = clap::value_parser!(i64).range(0..))]
    pub vesting_end_time: i64,
}
