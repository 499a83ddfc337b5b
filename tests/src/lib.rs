//! # Quantum-Chain Test Suite
//!
//! Unified test crate for the genesis tooling.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs             # Temporary homes, genesis fixture, keyring helpers
//!     ├── add_genesis_account.rs  # Service-level scenarios against real files
//!     └── cli.rs                  # The same flows through qc_genesis::run
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qc-tests
//!
//! # By category
//! cargo test -p qc-tests integration::add_genesis_account::
//! cargo test -p qc-tests integration::cli::
//! ```

pub mod integration;
