//! Simulation orchestration.
//!
//! The orchestrator only sequences the pipeline (parse, assemble, factor,
//! solve, derive) and owns no numerical logic. Each call allocates its own
//! system state, so concurrent simulations never share anything.

use num_complex::Complex64;

use crate::elements::Netlist;
use crate::error::Result;
use crate::netlist;
use crate::report::{self, Report};
use crate::solver;
use crate::value::Scalar;

/// Analysis mode for callers that carry the domain choice as data
/// (CLI flags, service requests). Library callers can instead pick the
/// domain statically via [`simulate`]'s type parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    /// Real-valued steady-state analysis
    Dc,
    /// Complex phasor analysis at a single implied frequency
    Ac,
}

/// A completed simulation: the derived quantities plus the raw element
/// lists, so an external renderer can draw the topology without the core
/// doing any graphics itself.
#[derive(Debug, Clone)]
pub struct Simulation<T: Scalar> {
    pub netlist: Netlist<T>,
    pub report: Report<T>,
}

/// Run a full simulation of a netlist in the numeric domain `T`.
pub fn simulate<T: Scalar>(text: &str) -> Result<Simulation<T>> {
    let netlist = netlist::parse::<T>(text)?;
    let mut system = solver::assemble(&netlist)?;
    system.factor()?;
    system.solve()?;
    let report = report::derive(&netlist, &system);
    Ok(Simulation { netlist, report })
}

/// DC analysis over real values.
pub fn simulate_dc(text: &str) -> Result<Simulation<f64>> {
    simulate::<f64>(text)
}

/// AC analysis over complex phasors.
pub fn simulate_ac(text: &str) -> Result<Simulation<Complex64>> {
    simulate::<Complex64>(text)
}

/// Run a simulation with the domain chosen at runtime and return the
/// formatted report. The mode dispatch happens exactly once, here.
pub fn simulate_report(text: &str, mode: Mode) -> Result<String> {
    match mode {
        Mode::Dc => Ok(simulate_dc(text)?.report.to_string()),
        Mode::Ac => Ok(simulate_ac(text)?.report.to_string()),
    }
}
