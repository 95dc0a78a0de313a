//! # Phasor Core
//!
//! A steady-state simulator for linear resistive networks driven by ideal
//! voltage sources, with a real-valued DC mode and a complex-phasor AC mode.
//!
//! This library provides:
//! - A line-oriented netlist format for resistors and voltage sources
//! - Modified Nodal Analysis (MNA) based system assembly
//! - A dense LU solver generic over the real and complex domains
//! - Derived quantities (node voltages, source and resistor currents) with
//!   a fixed-format text report
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`netlist`] - Parser for the netlist format
//! - [`elements`] - Typed elements and the parsed element lists
//! - [`value`] - Numeric domains (real DC, complex AC phasors)
//! - [`solver`] - MNA matrix assembly and LU solving
//! - [`report`] - Derived quantities and report formatting
//! - [`sim`] - Simulation orchestration
//!
//! ## Usage
//!
//! ```
//! use phasor_core::{simulate_dc, simulate_ac};
//!
//! let sim = simulate_dc("V1 0 1 5\nR1 0 1 10").unwrap();
//! assert!((sim.report.node_voltages[0] - 5.0).abs() < 1e-12);
//!
//! let sim = simulate_ac("V1 0 1 10∠30\nR1 0 1 5").unwrap();
//! assert!((sim.report.node_voltages[0].norm() - 10.0).abs() < 1e-12);
//! ```
//!
//! ### CLI
//!
//! ```bash
//! phasor circuit.txt --mode ac
//! ```
//!
//! ## Simulation Method
//!
//! Each call runs the same pure pipeline:
//!
//! 1. Parse the netlist text into ordered element lists
//! 2. Assemble the MNA system Ax = z over the chosen numeric domain
//! 3. Solve by LU decomposition with partial pivoting
//! 4. Derive source and resistor currents and format the report
//!
//! The numeric domain is a generic parameter fixed once per call; no stage
//! branches on a runtime mode tag. A singular system (floating subnetwork,
//! contradictory sources, unreferenced node index) is reported as a
//! dedicated, user-actionable error rather than a garbage solution.

pub mod elements;
pub mod error;
pub mod netlist;
pub mod report;
pub mod sim;
pub mod solver;
pub mod value;

// Re-export main types for convenience
pub use elements::{ElementKind, Netlist, NodeId, Resistor, VoltageSource};
pub use error::{PhasorError, Result};
pub use report::Report;
pub use sim::{simulate, simulate_ac, simulate_dc, simulate_report, Mode, Simulation};
pub use value::Scalar;
