//! Phasor - AC/DC Circuit Simulator
//!
//! Computes steady-state node voltages and branch currents for linear
//! resistive networks driven by ideal voltage sources.
//!
//! # Usage
//!
//! ```bash
//! phasor circuit.txt
//! phasor circuit.txt --mode ac
//! ```

use std::path::PathBuf;

use clap::Parser;
use phasor_core::{error::PhasorError, simulate_report, Mode, Result};

/// AC/DC circuit simulator for linear resistive networks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file
    #[arg(value_name = "NETLIST_FILE")]
    netlist_file: PathBuf,

    /// Analysis mode
    #[arg(short, long, value_enum, default_value = "dc")]
    mode: Mode,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.netlist_file).map_err(|e| PhasorError::FileRead {
        path: args.netlist_file.display().to_string(),
        source: e,
    })?;

    let report = simulate_report(&text, args.mode)?;
    print!("{}", report);

    Ok(())
}
