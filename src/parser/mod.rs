//! Parser module - reads polynomials from whitespace-separated tokens
//!
//! The format is a degree `d` followed by `d + 1` coefficients, ordered from
//! `x^0` to `x^d`:
//!
//! ```text
//! 2
//! 1 2 3        # 1 + 2x + 3x^2
//! ```
mod lexer;
mod reader;
mod tokens;

pub use reader::PolyReader;

use crate::helpers::trace;
use crate::{MathScalar, PolyError, Polynomial};
use lexer::Lexer;
use std::str::FromStr;
use tokens::Token;

/// Default upper bound on the degree accepted from text input
pub const DEFAULT_MAX_DEGREE: usize = 1_000_000;

/// Anything that can hand out tokens to the polynomial reader
///
/// The hooks run before the degree and before the coefficients are read; the
/// interactive reader uses them to print prompts.
pub(crate) trait TokenSource {
    /// Next token, or `None` at end of input
    fn next_token(&mut self) -> Result<Option<Token>, PolyError>;

    fn before_degree(&mut self) -> Result<(), PolyError> {
        Ok(())
    }

    fn before_coefficients(&mut self, _degree: usize) -> Result<(), PolyError> {
        Ok(())
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Result<Option<Token>, PolyError> {
        Ok(self.next())
    }
}

/// Parse a polynomial from a complete string
///
/// # Example
/// ```
/// use dense_poly::{Polynomial, parse};
///
/// let p: Polynomial = parse("2  1 2 3").unwrap();
/// assert_eq!(p.coefficients(), &[1.0, 2.0, 3.0]);
/// assert_eq!(p.evaluate(2.0), 17.0);
/// ```
///
/// # Errors
/// Returns `PolyError` if:
/// - The degree is not an integer, is negative or exceeds `DEFAULT_MAX_DEGREE`
/// - A coefficient is not a number
/// - The input ends before `d + 1` coefficients were read
/// - Tokens remain after the last coefficient
pub fn parse<T: MathScalar>(input: &str) -> Result<Polynomial<T>, PolyError> {
    parse_with_max_degree(input, DEFAULT_MAX_DEGREE)
}

/// Parse a polynomial from a complete string with a custom degree limit
///
/// # Errors
/// Same as [`parse`], with `max_degree` as the degree limit.
pub fn parse_with_max_degree<T: MathScalar>(
    input: &str,
    max_degree: usize,
) -> Result<Polynomial<T>, PolyError> {
    let mut lexer = Lexer::new(input);
    let poly = read_polynomial(&mut lexer, max_degree)?;

    if let Some(token) = lexer.next() {
        return Err(PolyError::TrailingInput {
            token: token.text,
            span: Some(token.span),
        });
    }
    Ok(poly)
}

impl<T: MathScalar> FromStr for Polynomial<T> {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Read one polynomial: degree, then `degree + 1` coefficients
///
/// Nothing is returned until every token was read and converted, so a failure
/// never yields a half-filled polynomial.
pub(crate) fn read_polynomial<T, S>(
    source: &mut S,
    max_degree: usize,
) -> Result<Polynomial<T>, PolyError>
where
    T: MathScalar,
    S: TokenSource + ?Sized,
{
    source.before_degree()?;
    let token = source
        .next_token()?
        .ok_or_else(|| PolyError::end_of_input("degree"))?;
    let degree = parse_degree(&token, max_degree)?;
    trace(format_args!("degree {} from '{}'", degree, token.text));

    source.before_coefficients(degree)?;
    let mut coefficients = Vec::with_capacity(degree + 1);
    for i in 0..=degree {
        let token = source
            .next_token()?
            .ok_or_else(|| PolyError::end_of_input(format!("coefficient of x^{}", i)))?;
        coefficients.push(parse_scalar::<T>(&token)?);
    }
    trace(format_args!("read {} coefficients", coefficients.len()));

    Ok(Polynomial::from_coefficients(coefficients))
}

/// Convert a degree token, enforcing non-negativity and the size limit
///
/// Integer literals outside the `i64` range saturate, so they still report
/// `NegativeDegree` or `DegreeTooLarge` rather than `InvalidDegree`.
pub(crate) fn parse_degree(token: &Token, max_degree: usize) -> Result<usize, PolyError> {
    let value: i64 = match token.text.parse() {
        Ok(v) => v,
        Err(_) if is_integer_literal(&token.text) => {
            if token.text.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        }
        Err(_) => {
            return Err(PolyError::invalid_degree_at(
                token.text.as_str(),
                token.span,
            ));
        }
    };

    if value < 0 {
        return Err(PolyError::NegativeDegree {
            value,
            span: Some(token.span),
        });
    }

    let degree = usize::try_from(value).unwrap_or(usize::MAX);
    if degree > max_degree {
        return Err(PolyError::DegreeTooLarge {
            degree,
            max: max_degree,
            span: Some(token.span),
        });
    }
    Ok(degree)
}

/// Optional sign followed by at least one ASCII digit
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Convert a numeric token into a scalar
pub(crate) fn parse_scalar<T: MathScalar>(token: &Token) -> Result<T, PolyError> {
    token
        .text
        .parse::<T>()
        .map_err(|_| PolyError::invalid_number_at(token.text.as_str(), token.span))
}
