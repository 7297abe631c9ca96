//! Property-Based and Fuzz Testing
//!
//! Uses quickcheck for property-based testing of:
//! - Parser robustness (fuzz testing)
//! - Arithmetic identities checked through evaluation

use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};

use crate::{PolyFormat, Polynomial, parse};

// ============================================================
// PART 1: GENERATORS
// ============================================================

/// Polynomial of degree 0..=6 with coefficients in [-9.99, 9.99]
#[derive(Clone, Debug)]
struct SmallPoly(Polynomial);

impl Arbitrary for SmallPoly {
    fn arbitrary(g: &mut Gen) -> Self {
        let degree = usize::arbitrary(g) % 7;
        let coefficients = (0..=degree)
            .map(|_| (i16::arbitrary(g) % 1000) as f64 / 100.0)
            .collect();
        SmallPoly(Polynomial::from_coefficients(coefficients))
    }
}

/// Evaluation point in [-3.9, 3.9]
#[derive(Clone, Copy, Debug)]
struct Point(f64);

impl Arbitrary for Point {
    fn arbitrary(g: &mut Gen) -> Self {
        Point((i8::arbitrary(g) % 40) as f64 / 10.0)
    }
}

/// Sum of |c_i| * |x|^i, a bound on rounding error growth during evaluation
fn magnitude(p: &Polynomial, x: f64) -> f64 {
    p.coefficients()
        .iter()
        .rev()
        .fold(0.0, |acc, c| acc * x.abs() + c.abs())
}

fn approx_eq(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= 1e-10 * (1.0 + scale)
}

// ============================================================
// PART 2: PARSER FUZZ TESTS
// ============================================================

#[cfg(test)]
mod parser_fuzz_tests {
    use super::*;

    /// Property: Parser should never panic on arbitrary input
    #[test]
    fn test_parser_never_panics_on_random_input() {
        fn prop_parser_no_panic(input: String) -> TestResult {
            // Parser should either succeed or return Err, never panic
            let _ = parse::<f64>(&input);
            TestResult::passed()
        }
        QuickCheck::new()
            .tests(1000)
            .max_tests(2000)
            .quickcheck(prop_parser_no_panic as fn(String) -> TestResult);
    }

    /// Property: whitespace token text produced from a polynomial parses back
    #[test]
    fn test_token_text_reparses() {
        fn prop_reparse(p: SmallPoly) -> bool {
            let p = p.0;
            let mut text = p.degree().to_string();
            for c in p.coefficients() {
                text.push(' ');
                text.push_str(&c.to_string());
            }
            parse::<f64>(&text).map(|q| q == p).unwrap_or(false)
        }
        QuickCheck::new()
            .tests(300)
            .quickcheck(prop_reparse as fn(SmallPoly) -> bool);
    }

    /// Fuzz test with specifically crafted edge cases
    #[test]
    fn test_parser_edge_cases() {
        let edge_cases = [
            "",
            "   ",
            "0",
            "-0 1",
            "+1 2 3",
            "1 2 3 4",
            "1e3",
            "18446744073709551616",
            "-9223372036854775808",
            "2 1..2 3 4",
            "1 ∞ 2",
            "0 0x10",
        ];

        for case in &edge_cases {
            // Should not panic - may succeed or fail with error
            let _ = parse::<f64>(case);
        }
    }
}

// ============================================================
// PART 3: ARITHMETIC PROPERTY TESTS
// ============================================================

#[cfg(test)]
mod arithmetic_property_tests {
    use super::*;

    /// Property: (a + b) - b evaluates like a
    #[test]
    fn test_add_then_sub_restores_values() {
        fn prop(a: SmallPoly, b: SmallPoly, x: Point) -> bool {
            let (a, b, x) = (a.0, b.0, x.0);
            let round_trip = &(&a + &b) - &b;
            let scale = magnitude(&a, x) + magnitude(&b, x);
            approx_eq(round_trip.evaluate(x), a.evaluate(x), scale)
        }
        QuickCheck::new()
            .tests(500)
            .quickcheck(prop as fn(SmallPoly, SmallPoly, Point) -> bool);
    }

    /// Property: evaluation distributes over addition
    #[test]
    fn test_evaluate_additive() {
        fn prop(a: SmallPoly, b: SmallPoly, x: Point) -> bool {
            let (a, b, x) = (a.0, b.0, x.0);
            let scale = magnitude(&a, x) + magnitude(&b, x);
            approx_eq((&a + &b).evaluate(x), a.evaluate(x) + b.evaluate(x), scale)
        }
        QuickCheck::new()
            .tests(500)
            .quickcheck(prop as fn(SmallPoly, SmallPoly, Point) -> bool);
    }

    /// Property: evaluation distributes over multiplication
    #[test]
    fn test_evaluate_multiplicative() {
        fn prop(a: SmallPoly, b: SmallPoly, x: Point) -> bool {
            let (a, b, x) = (a.0, b.0, x.0);
            let scale = magnitude(&a, x) * magnitude(&b, x);
            approx_eq((&a * &b).evaluate(x), a.evaluate(x) * b.evaluate(x), scale)
        }
        QuickCheck::new()
            .tests(500)
            .quickcheck(prop as fn(SmallPoly, SmallPoly, Point) -> bool);
    }

    /// Property: result degrees follow the alignment rules exactly
    #[test]
    fn test_result_degrees() {
        fn prop(a: SmallPoly, b: SmallPoly) -> bool {
            let (a, b) = (a.0, b.0);
            let max = a.degree().max(b.degree());
            (&a * &b).degree() == a.degree() + b.degree()
                && (&a + &b).degree() == max
                && (&a - &b).degree() == max
                && (&a * &b).coefficients().len() == a.degree() + b.degree() + 1
        }
        QuickCheck::new()
            .tests(300)
            .quickcheck(prop as fn(SmallPoly, SmallPoly) -> bool);
    }

    /// Property: Horner agrees with the naive sum of powers
    #[test]
    fn test_horner_matches_power_sum() {
        fn prop(a: SmallPoly, x: Point) -> bool {
            let (a, x) = (a.0, x.0);
            let naive: f64 = a
                .coefficients()
                .iter()
                .enumerate()
                .map(|(i, c)| c * x.powi(i as i32))
                .sum();
            approx_eq(a.evaluate(x), naive, magnitude(&a, x))
        }
        QuickCheck::new()
            .tests(500)
            .quickcheck(prop as fn(SmallPoly, Point) -> bool);
    }

    /// Property: arithmetic never mutates the operands and clones stay independent
    #[test]
    fn test_operands_and_clones_independent() {
        fn prop(a: SmallPoly, b: SmallPoly) -> bool {
            let (a, b) = (a.0, b.0);
            let a_before = a.clone();
            let mut c = a.clone();
            c = &c * &b;
            c[0] += 1.0;
            let _ = &a + &b;
            let _ = &a - &b;
            a == a_before && c.degree() == a.degree() + b.degree()
        }
        QuickCheck::new()
            .tests(300)
            .quickcheck(prop as fn(SmallPoly, SmallPoly) -> bool);
    }

    /// Property: scaling every coefficient below the threshold prints nothing
    #[test]
    fn test_negligible_polynomial_prints_empty() {
        fn prop(a: SmallPoly) -> bool {
            let tiny: Vec<f64> = a.0.coefficients().iter().map(|c| c * 1e-11).collect();
            let tiny = Polynomial::from_coefficients(tiny);
            tiny.to_string().is_empty()
                && PolyFormat::new().empty_as_zero(true).format(&tiny) == "0"
        }
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop as fn(SmallPoly) -> bool);
    }
}
