// Display formatting for polynomials
use crate::traits::{is_negligible, threshold};
use crate::{MathScalar, PolyFormat, Polynomial};
use std::fmt::{self, Write};

impl<T: MathScalar> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(f, self, &PolyFormat::default())
    }
}

/// Write terms from the highest exponent down to zero
///
/// A `+` is written before a positive coefficient whenever its exponent is not
/// the nominal degree, whether or not a term was emitted before it. Negative
/// coefficients carry their own sign.
pub(crate) fn write_terms<T: MathScalar, W: Write>(
    out: &mut W,
    poly: &Polynomial<T>,
    format: &PolyFormat,
) -> fmt::Result {
    let limit: T = threshold(format.get_zero_threshold());
    let var = format.get_variable();
    let degree = poly.degree();
    let mut emitted = false;

    for (i, &c) in poly.coefficients().iter().enumerate().rev() {
        if is_negligible(c, limit) {
            continue;
        }
        if i != degree && c > T::zero() {
            out.write_char('+')?;
        }
        write!(out, "{}", c)?;
        if i > 0 {
            out.write_char(var)?;
        }
        if i > 1 {
            write!(out, "^{}", i)?;
        }
        emitted = true;
    }

    if !emitted && format.is_empty_as_zero() {
        out.write_char('0')?;
    }
    Ok(())
}
