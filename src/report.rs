//! Derived quantities and report formatting.
//!
//! Everything here is computed after the solve: resistor currents come from
//! Ohm's law over the solved node voltages and are never part of the linear
//! system itself.

use std::fmt;

use crate::elements::{Netlist, NodeId};
use crate::solver::MnaMatrix;
use crate::value::Scalar;

/// Decimal places for reported voltages.
pub const VOLTAGE_DECIMALS: usize = 4;
/// Decimal places for reported currents.
pub const CURRENT_DECIMALS: usize = 6;

/// Current through a resistor, directed from its first to its second node.
#[derive(Debug, Clone)]
pub struct ResistorCurrent<T: Scalar> {
    pub name: String,
    pub nodes: [NodeId; 2],
    pub current: T,
}

/// All derived quantities of a solved simulation.
///
/// `Display` renders the fixed-format text report; the fields are plain
/// data for callers that format or plot on their own.
#[derive(Debug, Clone)]
pub struct Report<T: Scalar> {
    /// Voltage of node i at index i−1. Ground is not listed; it is 0 by
    /// definition.
    pub node_voltages: Vec<T>,
    /// Branch current per voltage source, in parse order.
    pub source_currents: Vec<(String, T)>,
    /// Ohm's-law current per resistor, in parse order.
    pub resistor_currents: Vec<ResistorCurrent<T>>,
}

/// Compute all derived quantities from a solved system.
pub fn derive<T: Scalar>(netlist: &Netlist<T>, system: &MnaMatrix<T>) -> Report<T> {
    let node_voltages = system.x[..system.num_nodes].to_vec();

    let source_currents = netlist
        .sources
        .iter()
        .enumerate()
        .map(|(k, v)| (v.name.clone(), system.source_current(k)))
        .collect();

    let resistor_currents = netlist
        .resistors
        .iter()
        .map(|r| {
            let v1 = system.voltage(r.nodes[0].unknown_index());
            let v2 = system.voltage(r.nodes[1].unknown_index());
            ResistorCurrent {
                name: r.name.clone(),
                nodes: r.nodes,
                current: (v1 - v2) * T::from_real(r.conductance()),
            }
        })
        .collect();

    Report {
        node_voltages,
        source_currents,
        resistor_currents,
    }
}

impl<T: Scalar> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Mode: {}", T::DOMAIN)?;
        writeln!(f)?;

        writeln!(f, "Node Voltages:")?;
        for (i, v) in self.node_voltages.iter().enumerate() {
            writeln!(f, "  V({}) = {} V", i + 1, v.format_fixed(VOLTAGE_DECIMALS))?;
        }

        writeln!(f)?;
        writeln!(f, "Voltage Source Currents:")?;
        for (name, current) in &self.source_currents {
            writeln!(
                f,
                "  I({}) = {} A",
                name,
                current.format_fixed(CURRENT_DECIMALS)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Resistor Currents:")?;
        for rc in &self.resistor_currents {
            writeln!(
                f,
                "  I({}) = {} A (from node {} to {})",
                rc.name,
                rc.current.format_fixed(CURRENT_DECIMALS),
                rc.nodes[0],
                rc.nodes[1]
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_dc_report_format() {
        let report: Report<f64> = Report {
            node_voltages: vec![5.0],
            source_currents: vec![("V1".to_string(), -0.5)],
            resistor_currents: vec![ResistorCurrent {
                name: "R1".to_string(),
                nodes: [NodeId(0), NodeId(1)],
                current: -0.5,
            }],
        };

        let expected = "\
Simulation Mode: DC

Node Voltages:
  V(1) = 5.0000 V

Voltage Source Currents:
  I(V1) = -0.500000 A

Resistor Currents:
  I(R1) = -0.500000 A (from node 0 to 1)
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_ac_report_format() {
        let report: Report<Complex64> = Report {
            node_voltages: vec![Complex64::new(0.0, 5.0)],
            source_currents: vec![("V1".to_string(), Complex64::new(0.0, -0.5))],
            resistor_currents: vec![],
        };

        let text = report.to_string();
        assert!(text.starts_with("Simulation Mode: AC\n"));
        assert!(text.contains("V(1) = 5.0000∠90.00° V"));
        assert!(text.contains("I(V1) = 0.500000∠-90.00° A"));
    }
}
