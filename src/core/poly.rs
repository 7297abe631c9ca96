//! Dense univariate polynomial
//!
//! `P(x) = c[0] + c[1]*x + ... + c[n]*x^n` stored as a contiguous coefficient
//! buffer indexed by exponent. The degree is nominal: it is the buffer length
//! minus one, and leading coefficients may be zero.

use crate::{MathScalar, PolyError};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

// =============================================================================
// POLYNOMIAL
// =============================================================================

/// Dense polynomial with floating-point coefficients
///
/// The buffer always holds `degree + 1` entries, so the zero polynomial is a
/// single `0` coefficient of degree 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T = f64> {
    /// Coefficient of `x^i` at index `i`, never empty
    coefficients: Vec<T>,
}

impl<T: MathScalar> Default for Polynomial<T> {
    fn default() -> Self {
        Polynomial::new(0)
    }
}

impl<T: MathScalar> Polynomial<T> {
    /// Create a polynomial of the given degree with all coefficients zero
    pub fn new(degree: usize) -> Self {
        Polynomial {
            coefficients: vec![T::zero(); degree + 1],
        }
    }

    /// Create a zero polynomial from a signed degree, rejecting negatives
    ///
    /// # Errors
    /// Returns `PolyError::NegativeDegree` if `degree < 0`.
    pub fn try_new(degree: i64) -> Result<Self, PolyError> {
        let degree = usize::try_from(degree).map_err(|_| PolyError::NegativeDegree {
            value: degree,
            span: None,
        })?;
        Ok(Polynomial::new(degree))
    }

    /// Create a polynomial from coefficients ordered from `x^0` upwards
    ///
    /// An empty vector yields the zero polynomial of degree 0. Trailing zeros
    /// are kept and count towards the degree.
    pub fn from_coefficients(mut coefficients: Vec<T>) -> Self {
        if coefficients.is_empty() {
            coefficients.push(T::zero());
        }
        Polynomial { coefficients }
    }

    /// Create a constant polynomial
    pub fn constant(c: T) -> Self {
        Polynomial {
            coefficients: vec![c],
        }
    }

    /// Nominal degree (highest stored exponent)
    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Get read access to the coefficients
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Get mutable access to the coefficients (length is fixed)
    pub fn coefficients_mut(&mut self) -> &mut [T] {
        &mut self.coefficients
    }

    /// Coefficient of `x^i`, zero beyond the degree
    #[inline]
    pub fn coefficient(&self, i: usize) -> T {
        self.coefficients.get(i).copied().unwrap_or_else(T::zero)
    }

    /// Consume the polynomial and return its coefficient buffer
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }

    /// Evaluate `P(x)` with Horner's method
    ///
    /// Walks from the highest exponent down: `acc = acc * x + c[i]`.
    pub fn evaluate(&self, x: T) -> T {
        self.coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// Evaluate at each point in order
    pub fn evaluate_many(&self, points: &[T]) -> Vec<T> {
        points.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Add two polynomials (same as `&self + other`)
    ///
    /// Result degree is `max(self.degree, other.degree)`; missing coefficients
    /// count as zero.
    pub fn add_poly(&self, other: &Polynomial<T>) -> Polynomial<T> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtract `other` from `self`
    ///
    /// Same degree alignment as [`Polynomial::add_poly`].
    pub fn sub_poly(&self, other: &Polynomial<T>) -> Polynomial<T> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiply two polynomials (discrete convolution)
    ///
    /// Result degree is exactly `self.degree + other.degree`, even when
    /// leading coefficients are zero.
    pub fn mul_poly(&self, other: &Polynomial<T>) -> Polynomial<T> {
        let mut result = Polynomial::new(self.degree() + other.degree());
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in other.coefficients.iter().enumerate() {
                result.coefficients[i + j] += a * b;
            }
        }
        result
    }

    /// Combine coefficients pairwise over the longer of the two buffers
    fn zip_with<F>(&self, other: &Polynomial<T>, op: F) -> Polynomial<T>
    where
        F: Fn(T, T) -> T,
    {
        let degree = self.degree().max(other.degree());
        let coefficients = (0..=degree)
            .map(|i| op(self.coefficient(i), other.coefficient(i)))
            .collect();
        Polynomial { coefficients }
    }
}

impl<T> Index<usize> for Polynomial<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.coefficients[i]
    }
}

impl<T> IndexMut<usize> for Polynomial<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coefficients[i]
    }
}

impl<T: MathScalar> From<Vec<T>> for Polynomial<T> {
    fn from(coefficients: Vec<T>) -> Self {
        Polynomial::from_coefficients(coefficients)
    }
}

// ============================================================================
// Operator Overloading
// ============================================================================

// `&self` / `&rhs` deref-coerce to `&Polynomial<T>` for both owned and
// borrowed operands.
macro_rules! impl_binary_ops {
    ($lhs:ty, $rhs:ty) => {
        impl<T: MathScalar> Add<$rhs> for $lhs {
            type Output = Polynomial<T>;
            fn add(self, rhs: $rhs) -> Polynomial<T> {
                Polynomial::<T>::add_poly(&self, &rhs)
            }
        }
        impl<T: MathScalar> Sub<$rhs> for $lhs {
            type Output = Polynomial<T>;
            fn sub(self, rhs: $rhs) -> Polynomial<T> {
                Polynomial::<T>::sub_poly(&self, &rhs)
            }
        }
        impl<T: MathScalar> Mul<$rhs> for $lhs {
            type Output = Polynomial<T>;
            fn mul(self, rhs: $rhs) -> Polynomial<T> {
                Polynomial::<T>::mul_poly(&self, &rhs)
            }
        }
    };
}

impl_binary_ops!(Polynomial<T>, Polynomial<T>);
impl_binary_ops!(Polynomial<T>, &Polynomial<T>);
impl_binary_ops!(&Polynomial<T>, Polynomial<T>);
impl_binary_ops!(&Polynomial<T>, &Polynomial<T>);
