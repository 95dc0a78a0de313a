//! Netlist parser.
//!
//! The netlist format is line-oriented, one element per line:
//!
//! ```text
//! <name> <node1:int> <node2:int> <value> [ignored...]
//! ```
//!
//! - Blank lines and lines starting with `#` are skipped.
//! - Tokens beyond the fourth are ignored (forward-compatible with unused
//!   fields).
//! - The first character of the name dispatches the element kind: `R`/`r`
//!   for resistors, `V`/`v` for voltage sources. Any other prefix is a hard
//!   [`PhasorError::UnknownElementType`].
//! - Resistor values are real literals in both domains; source values are
//!   real literals in DC and either real or `mag∠phase` phasor literals in
//!   AC.
//!
//! # Example
//!
//! ```text
//! # Voltage divider
//! V1 0 2 5
//! R1 0 1 100
//! R2 1 2 220
//! ```

use crate::elements::{ElementKind, Netlist, NodeId, Resistor, VoltageSource};
use crate::error::{PhasorError, Result};
use crate::value::Scalar;

/// Parse netlist text into ordered element lists in the numeric domain `T`.
///
/// Parsing fails fast: the first malformed line aborts before any matrix
/// work begins, and no malformed or unrecognized line is ever skipped.
pub fn parse<T: Scalar>(text: &str) -> Result<Netlist<T>> {
    let mut resistors = Vec::new();
    let mut sources = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(PhasorError::parse(
                line_no,
                format!(
                    "expected `<name> <node1> <node2> <value>`, got {} field(s)",
                    fields.len()
                ),
            ));
        }

        let name = fields[0];
        let n1 = parse_node(fields[1], line_no)?;
        let n2 = parse_node(fields[2], line_no)?;

        // Dispatch on the name prefix over the closed element set.
        let prefix = name.chars().next().unwrap_or('?');
        match ElementKind::from_prefix(prefix) {
            Some(ElementKind::Resistor) => {
                let resistance = f64::parse_literal(fields[3]).ok_or_else(|| {
                    PhasorError::parse(
                        line_no,
                        format!("invalid resistance '{}' for '{}'", fields[3], name),
                    )
                })?;
                resistors.push(Resistor {
                    name: name.to_string(),
                    nodes: [n1, n2],
                    resistance,
                });
            }
            Some(ElementKind::VoltageSource) => {
                let value = T::parse_literal(fields[3]).ok_or_else(|| {
                    PhasorError::parse(
                        line_no,
                        format!("invalid source value '{}' for '{}'", fields[3], name),
                    )
                })?;
                sources.push(VoltageSource {
                    name: name.to_string(),
                    nodes: [n1, n2],
                    value,
                });
            }
            None => {
                return Err(PhasorError::UnknownElementType {
                    name: name.to_string(),
                    line: line_no,
                });
            }
        }
    }

    Ok(Netlist { resistors, sources })
}

fn parse_node(token: &str, line: usize) -> Result<NodeId> {
    token.parse::<usize>().map(NodeId).map_err(|_| {
        PhasorError::parse(
            line,
            format!("invalid node '{}': expected a non-negative integer", token),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_parse_basic() {
        let netlist = parse::<f64>("V1 0 1 5\nR1 0 1 10").unwrap();
        assert_eq!(netlist.resistors.len(), 1);
        assert_eq!(netlist.sources.len(), 1);
        assert_eq!(netlist.resistors[0].name, "R1");
        assert_eq!(netlist.resistors[0].nodes, [NodeId(0), NodeId(1)]);
        assert_eq!(netlist.resistors[0].resistance, 10.0);
        assert_eq!(netlist.sources[0].value, 5.0);
    }

    #[test]
    fn test_skips_comments_and_blanks() {
        let text = "# a comment\n\n   \nR1 1 2 100\n  # indented comment\n";
        let netlist = parse::<f64>(text).unwrap();
        assert_eq!(netlist.resistors.len(), 1);
        assert!(netlist.sources.is_empty());
    }

    #[test]
    fn test_preserves_source_order() {
        let netlist = parse::<f64>("V2 0 2 3\nR1 1 2 10\nV1 0 1 5").unwrap();
        let names: Vec<_> = netlist.sources.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["V2", "V1"]);
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let netlist = parse::<f64>("R1 1 2 100 tempco=200 extra").unwrap();
        assert_eq!(netlist.resistors[0].resistance, 100.0);
    }

    #[test]
    fn test_too_few_tokens() {
        let err = parse::<f64>("R1 1 2").unwrap_err();
        match err {
            PhasorError::Parse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("3 field(s)"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_bad_node_token() {
        let err = parse::<f64>("R1 a 2 100").unwrap_err();
        assert!(matches!(err, PhasorError::Parse { line: 1, .. }));

        let err = parse::<f64>("R1 -1 2 100").unwrap_err();
        assert!(matches!(err, PhasorError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_unknown_element_prefix_fails() {
        let err = parse::<f64>("R1 0 1 10\nC1 0 1 1e-6").unwrap_err();
        match err {
            PhasorError::UnknownElementType { name, line } => {
                assert_eq!(name, "C1");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_phasor_source_value() {
        let netlist = parse::<Complex64>("V1 0 1 5∠-45").unwrap();
        let v = netlist.sources[0].value;
        assert!((v.norm() - 5.0).abs() < 1e-12);
        assert!((v.arg().to_degrees() + 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_resistor_value_is_real_even_in_ac() {
        let err = parse::<Complex64>("R1 0 1 10∠0").unwrap_err();
        assert!(matches!(err, PhasorError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_phasor_rejected_in_dc() {
        let err = parse::<f64>("V1 0 1 5∠0").unwrap_err();
        assert!(matches!(err, PhasorError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_case_insensitive_prefix() {
        let netlist = parse::<f64>("r1 0 1 10\nv1 0 1 5").unwrap();
        assert_eq!(netlist.resistors.len(), 1);
        assert_eq!(netlist.sources.len(), 1);
    }
}
