//! Error types for the phasor circuit simulator.
//!
//! This module provides a unified error type [`PhasorError`] that covers
//! all error conditions that can occur during netlist parsing, system
//! assembly, and solving.

use thiserror::Error;

/// Result type alias using [`PhasorError`].
pub type Result<T> = std::result::Result<T, PhasorError>;

/// Unified error type for all simulator operations.
#[derive(Error, Debug)]
pub enum PhasorError {
    // ============ Netlist Parsing Errors ============
    /// Malformed netlist line or unparsable literal
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Element name prefix that is neither a resistor nor a voltage source
    #[error("Unknown element type '{name}' at line {line}: only resistors (R) and voltage sources (V) are supported")]
    UnknownElementType { name: String, line: usize },

    // ============ Topology Errors ============
    /// Netlist contains no elements, so there is no system to size
    #[error("Empty netlist: at least one element is required")]
    EmptyNetlist,

    // ============ Solve Errors ============
    /// The assembled system has no unique solution
    #[error("Singular system: the circuit has no unique solution, check connectivity")]
    SingularSystem,

    // ============ I/O Errors ============
    /// Error reading a netlist file (driver-level, never raised by the core)
    #[error("Failed to read netlist file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PhasorError {
    /// Create a parse error for the given 1-based line number.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
