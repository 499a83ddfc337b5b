//! # Integration Tests
//!
//! `qc-18-genesis-accounts` and `qc-genesis` exercised against genesis files
//! in temporary home directories.

#[cfg(test)]
pub mod fixtures;

pub mod add_genesis_account;
pub mod cli;
