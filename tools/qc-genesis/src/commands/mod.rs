//! Subcommand implementations.

pub mod add_genesis_account;
