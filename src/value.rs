//! Numeric value domains and literal parsing.
//!
//! A simulation runs in exactly one numeric domain, chosen once per call:
//! real [`f64`] for DC analysis or [`Complex64`] phasors for single-frequency
//! AC analysis. The [`Scalar`] trait threads that choice through the netlist
//! parser, the MNA assembly, the LU solve and the report formatting, so no
//! stage branches on a mode tag.
//!
//! Phasor literals use the `∠` marker: `10∠30` is 10 at +30° and `5∠-45` is
//! 5 at −45°. A bare real literal in the phasor domain is a 0° phasor.

use std::fmt;
use std::ops::Neg;

use num_complex::Complex64;
use num_traits::NumAssign;

/// Marker separating magnitude and phase-in-degrees in a phasor literal.
pub const PHASOR_MARKER: char = '∠';

/// A matrix/vector element type for one analysis domain.
///
/// Implemented for `f64` (DC) and `Complex64` (AC). The arithmetic bounds
/// come from `num_traits` so the same stamping and LU code serves both
/// domains unchanged.
pub trait Scalar: NumAssign + Neg<Output = Self> + Copy + fmt::Debug + 'static {
    /// Analysis domain label used in report headers.
    const DOMAIN: &'static str;

    /// Promote a real number into this domain.
    fn from_real(re: f64) -> Self;

    /// Parse a netlist value literal, or `None` if it is malformed for
    /// this domain.
    fn parse_literal(text: &str) -> Option<Self>;

    /// Magnitude, used for pivot selection and singularity checks.
    fn modulus(self) -> f64;

    /// Render with a fixed number of decimals; phasors render as
    /// `magnitude∠phase°` with the phase at two decimals.
    fn format_fixed(self, decimals: usize) -> String;
}

impl Scalar for f64 {
    const DOMAIN: &'static str = "DC";

    fn from_real(re: f64) -> Self {
        re
    }

    /// A plain real literal; anything else (including a phasor marker)
    /// is rejected.
    fn parse_literal(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn modulus(self) -> f64 {
        self.abs()
    }

    fn format_fixed(self, decimals: usize) -> String {
        format!("{:.*}", decimals, self)
    }
}

impl Scalar for Complex64 {
    const DOMAIN: &'static str = "AC";

    fn from_real(re: f64) -> Self {
        Complex64::new(re, 0.0)
    }

    /// `<magnitude>∠<phase-degrees>` with an optional sign on the phase,
    /// or a bare real literal promoted to a 0° phasor.
    fn parse_literal(text: &str) -> Option<Self> {
        match text.split_once(PHASOR_MARKER) {
            Some((magnitude, phase)) => {
                let magnitude: f64 = magnitude.parse().ok()?;
                let phase_deg: f64 = phase.parse().ok()?;
                Some(Complex64::from_polar(magnitude, phase_deg.to_radians()))
            }
            None => text.parse::<f64>().ok().map(|re| Complex64::new(re, 0.0)),
        }
    }

    fn modulus(self) -> f64 {
        self.norm()
    }

    /// Magnitude and phase are recovered from the complex value on every
    /// call (`arg` of zero is zero, range (−180°, 180°]); they are never
    /// stored separately.
    fn format_fixed(self, decimals: usize) -> String {
        format!(
            "{:.*}{}{:.2}°",
            decimals,
            self.norm(),
            PHASOR_MARKER,
            self.arg().to_degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_real() {
        assert_eq!(f64::parse_literal("5"), Some(5.0));
        assert_eq!(f64::parse_literal("-2.5e3"), Some(-2500.0));
        assert_eq!(f64::parse_literal("abc"), None);
        // Phasor literals are not valid in the DC domain
        assert_eq!(f64::parse_literal("5∠0"), None);
    }

    #[test]
    fn test_parse_phasor() {
        let v = Complex64::parse_literal("10∠30").unwrap();
        assert_relative_eq!(v.re, 10.0 * 30f64.to_radians().cos(), epsilon = 1e-12);
        assert_relative_eq!(v.im, 5.0, epsilon = 1e-12);

        let v = Complex64::parse_literal("5∠-45").unwrap();
        assert_relative_eq!(v.norm(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(v.arg().to_degrees(), -45.0, epsilon = 1e-12);

        let v = Complex64::parse_literal("5∠+45").unwrap();
        assert_relative_eq!(v.arg().to_degrees(), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_bare_real_as_phasor() {
        let v = Complex64::parse_literal("5").unwrap();
        assert_eq!(v, Complex64::new(5.0, 0.0));
    }

    #[test]
    fn test_parse_malformed_phasor() {
        assert_eq!(Complex64::parse_literal("∠30"), None);
        assert_eq!(Complex64::parse_literal("5∠"), None);
        assert_eq!(Complex64::parse_literal("5∠x"), None);
        assert_eq!(Complex64::parse_literal("x∠30"), None);
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(5.0f64.format_fixed(4), "5.0000");
        assert_eq!((-0.5f64).format_fixed(6), "-0.500000");
        assert_eq!(Complex64::new(5.0, 0.0).format_fixed(4), "5.0000∠0.00°");
        // arg(0) is 0 by convention
        assert_eq!(Complex64::new(0.0, 0.0).format_fixed(4), "0.0000∠0.00°");
    }
}
