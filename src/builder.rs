//! Builder pattern API for polynomial formatting
//!
//! # Example
//! ```
//! use dense_poly::{PolyFormat, Polynomial};
//!
//! let p = Polynomial::from_coefficients(vec![0.0_f64, 0.0]);
//! assert_eq!(PolyFormat::new().format(&p), "");
//! assert_eq!(PolyFormat::new().empty_as_zero(true).format(&p), "0");
//! ```

use crate::traits::ZERO_THRESHOLD;
use crate::{MathScalar, Polynomial, display};

/// Formatting configuration for polynomials
///
/// The default reproduces `Display`: variable `x`, terms with magnitude below
/// `1e-9` omitted, and an empty string when every term is omitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyFormat {
    variable: char,
    zero_threshold: f64,
    empty_as_zero: bool,
}

impl Default for PolyFormat {
    fn default() -> Self {
        Self {
            variable: 'x',
            zero_threshold: ZERO_THRESHOLD,
            empty_as_zero: false,
        }
    }
}

impl PolyFormat {
    /// Create a new format builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variable symbol written after non-constant coefficients
    pub fn variable(mut self, var: char) -> Self {
        self.variable = var;
        self
    }

    /// Set the magnitude below which a coefficient's term is omitted
    pub fn zero_threshold(mut self, threshold: f64) -> Self {
        self.zero_threshold = threshold;
        self
    }

    /// Print `0` instead of an empty string when every term is omitted
    pub fn empty_as_zero(mut self, enabled: bool) -> Self {
        self.empty_as_zero = enabled;
        self
    }

    pub fn get_variable(&self) -> char {
        self.variable
    }

    pub fn get_zero_threshold(&self) -> f64 {
        self.zero_threshold
    }

    pub fn is_empty_as_zero(&self) -> bool {
        self.empty_as_zero
    }

    /// Render a polynomial to a string
    pub fn format<T: MathScalar>(&self, poly: &Polynomial<T>) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = display::write_terms(&mut out, poly, self);
        out
    }
}
