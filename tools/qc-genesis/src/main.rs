//! qc-genesis: Quantum-Chain genesis tool

use anyhow::{Context, Result};
use clap::Parser;
use quantum_telemetry::{init_logging, TelemetryConfig};

use qc_genesis::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut telemetry = TelemetryConfig::for_tool("qc-genesis");
    if let Some(level) = &cli.log_level {
        telemetry = telemetry.with_log_level(level.clone());
    }
    init_logging(&telemetry).context("Failed to initialize logging")?;

    qc_genesis::run(cli)
}
