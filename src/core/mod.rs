//! Core types
//!
//! - `Polynomial` - dense coefficient buffer, arithmetic and evaluation

pub(crate) mod poly;

pub use poly::Polynomial;
