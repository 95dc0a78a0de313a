//! Typed netlist elements and the parsed element lists.

use std::collections::BTreeSet;
use std::fmt;

use crate::value::Scalar;

/// A node index in the netlist. Node 0 is always the ground reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The ground node (always index 0).
    pub const GROUND: NodeId = NodeId(0);

    /// Check if this is the ground node.
    pub fn is_ground(&self) -> bool {
        self.0 == 0
    }

    /// Row/column of this node's voltage unknown in the MNA system.
    /// Returns `None` for ground, whose voltage is 0 by definition.
    pub fn unknown_index(&self) -> Option<usize> {
        if self.is_ground() {
            None
        } else {
            Some(self.0 - 1)
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of element kinds, dispatched on the name prefix.
///
/// Lines with any other prefix are a hard parse failure; they are never
/// silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Resistor,
    VoltageSource,
}

impl ElementKind {
    /// Determine the element kind from the first character of its name
    /// (case-insensitive).
    pub fn from_prefix(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(ElementKind::Resistor),
            'V' => Some(ElementKind::VoltageSource),
            _ => None,
        }
    }
}

/// A resistor element.
#[derive(Debug, Clone)]
pub struct Resistor {
    pub name: String,
    pub nodes: [NodeId; 2],
    /// Resistance in ohms. Always real, even in AC analysis.
    pub resistance: f64,
}

impl Resistor {
    /// Conductance stamped into the G block of the MNA matrix.
    pub fn conductance(&self) -> f64 {
        1.0 / self.resistance
    }
}

/// An ideal independent voltage source.
///
/// Each source owns one extra unknown in the MNA system: its branch
/// current. The source drives `nodes[1]` to `value` volts above
/// `nodes[0]`, and the branch current is measured flowing out of
/// `nodes[1]` into the source.
#[derive(Debug, Clone)]
pub struct VoltageSource<T: Scalar> {
    pub name: String,
    pub nodes: [NodeId; 2],
    /// Real voltage in DC analysis, complex amplitude in AC analysis.
    pub value: T,
}

/// The parsed netlist: ordered element lists in one numeric domain.
///
/// Input order is preserved within each list; the position of a voltage
/// source fixes the column of its branch-current unknown. The lists are
/// plain data and double as the topology handed to external renderers.
#[derive(Debug, Clone)]
pub struct Netlist<T: Scalar> {
    pub resistors: Vec<Resistor>,
    pub sources: Vec<VoltageSource<T>>,
}

impl<T: Scalar> Netlist<T> {
    /// True if the netlist contains no elements at all.
    pub fn is_empty(&self) -> bool {
        self.resistors.is_empty() && self.sources.is_empty()
    }

    /// Highest node index referenced by any element.
    ///
    /// This sizes the MNA system: nodes 1..=N carry voltage unknowns.
    /// Recomputed per call; an index in the range referenced by no element
    /// yields a zero matrix row and surfaces as a singular system at solve
    /// time, not here.
    pub fn num_nodes(&self) -> usize {
        let resistor_nodes = self.resistors.iter().flat_map(|r| r.nodes);
        let source_nodes = self.sources.iter().flat_map(|v| v.nodes);
        resistor_nodes
            .chain(source_nodes)
            .map(|n| n.0)
            .max()
            .unwrap_or(0)
    }

    /// All distinct nodes referenced by the netlist, in ascending order.
    /// Intended for topology renderers.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut set = BTreeSet::new();
        for r in &self.resistors {
            set.extend(r.nodes);
        }
        for v in &self.sources {
            set.extend(v.nodes);
        }
        set.into_iter().collect()
    }

    /// Labeled edges for topology renderers: element name, terminal pair,
    /// and a human-readable value label.
    pub fn edges(&self) -> Vec<(&str, [NodeId; 2], String)> {
        let mut edges = Vec::with_capacity(self.resistors.len() + self.sources.len());
        for r in &self.resistors {
            edges.push((r.name.as_str(), r.nodes, format!("{}Ω", r.resistance)));
        }
        for v in &self.sources {
            edges.push((v.name.as_str(), v.nodes, format!("{}V", v.value.format_fixed(4))));
        }
        edges
    }
}
