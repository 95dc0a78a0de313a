//! MNA (Modified Nodal Analysis) assembly and solving.
//!
//! MNA assembles a system of equations Ax = z where:
//! - x contains node voltages and source branch currents
//! - A is the conductance/coefficient matrix
//! - z is the source vector
//!
//! The matrix structure is:
//! ```text
//! [ G   B ] [ v ]   [ 0 ]
//! [ C   D ] [ j ] = [ e ]
//! ```
//!
//! where:
//! - G (N×N) is the conductance matrix (node equations)
//! - B, C = Bᵗ connect voltage sources to nodes
//! - D is 0 (ideal sources, no source-to-source coupling)
//! - v is the vector of node voltages
//! - j is the vector of source branch currents
//! - e is the vector of source voltage values
//!
//! The top N entries of z are always zero: no independent current
//! injections exist in this element set.

mod mna;

pub use mna::{assemble, MnaMatrix};

/// Smallest pivot magnitude accepted during LU factorization.
///
/// A pivot below this is reported as a singular system rather than solved
/// into garbage. Gap nodes (a zero matrix row) hit this threshold exactly;
/// near-singular topologies hit it through cancellation.
pub const PIVOT_TOLERANCE: f64 = 1e-12;
