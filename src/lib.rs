//! Dense Univariate Polynomials
//!
//! A small, focused Rust library for polynomials with floating-point
//! coefficients stored densely by exponent.
//!
//! # Features
//! - Construction from a degree or a coefficient vector
//! - Addition, subtraction and multiplication with operator overloading
//! - Horner evaluation, optionally batched in parallel (`parallel` feature)
//! - Token-based text input (`parse`, `FromStr`, `PolyReader`)
//! - Configurable text output (`Display`, `PolyFormat`)
//!
//! # Usage Examples
//!
//! ```
//! use dense_poly::Polynomial;
//!
//! let p1: Polynomial = "2 1 2 3".parse().unwrap(); // 1 + 2x + 3x^2
//! let p2: Polynomial = "1 4 5".parse().unwrap(); // 4 + 5x
//!
//! assert_eq!((&p1 + &p2).to_string(), "3x^2+7x+5");
//! assert_eq!((&p1 * &p2).coefficients(), &[4.0, 13.0, 22.0, 15.0]);
//! assert_eq!(p1.evaluate(2.0), 17.0);
//! ```

mod builder;
mod core;
mod display;
mod error;
mod helpers;
mod parser;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use builder::PolyFormat;
pub use crate::core::Polynomial;
pub use error::{PolyError, Span};
pub use parser::{DEFAULT_MAX_DEGREE, PolyReader, parse, parse_with_max_degree};
pub use traits::{MathScalar, ZERO_THRESHOLD};
