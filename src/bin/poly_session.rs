//! Interactive polynomial session
//!
//! Reads two polynomials, prints them with their sum, difference and product,
//! then evaluates the first one at a user-supplied point.
//!
//! Run with: cargo run --bin poly_session
//! Set POLY_TRACE=1 to see token-level trace output on stderr.
use dense_poly::{PolyError, PolyReader, Polynomial};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let code = session(io::stdin().lock(), &mut io::stdout(), &mut io::stderr());
    ExitCode::from(code)
}

/// Run the session and report failures on `err`; returns the exit status
fn session<R: BufRead, W: Write, E: Write>(input: R, out: &mut W, err: &mut E) -> u8 {
    match run(input, out) {
        Ok(()) => 0,
        Err(e) => {
            // Nothing more to report if stderr itself is gone
            let _ = writeln!(err, "error: {}", e);
            1
        }
    }
}

fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<(), PolyError> {
    let mut reader = PolyReader::new(input, out).prompts(true);

    writeln!(reader.output(), "Input Polynomial P1:")?;
    let p1: Polynomial = reader.read_polynomial()?;
    writeln!(reader.output(), "Input Polynomial P2:")?;
    let p2: Polynomial = reader.read_polynomial()?;

    let out = reader.output();
    writeln!(out)?;
    writeln!(out, "P1(x) = {}", p1)?;
    writeln!(out, "P2(x) = {}", p2)?;

    writeln!(out)?;
    writeln!(out, "[Results]")?;
    writeln!(out, "P1 + P2 = {}", &p1 + &p2)?;
    writeln!(out, "P1 - P2 = {}", &p1 - &p2)?;
    writeln!(out, "P1 * P2 = {}", &p1 * &p2)?;

    write!(out, "\nEnter value of x to evaluate P1(x): ")?;
    out.flush()?;
    let x: f64 = reader.read_value()?;
    writeln!(reader.output(), "P1({}) = {}", x, p1.evaluate(x))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = session(input.as_bytes(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_full_transcript() {
        let (code, out, err) = run_session("2\n1 2 3\n1\n4 5\n2\n");

        assert_eq!(code, 0);
        assert!(err.is_empty());
        assert_eq!(
            out,
            "Input Polynomial P1:\n\
             Enter degree: Enter coefficients (from x^0 to x^2):\n\
             Input Polynomial P2:\n\
             Enter degree: Enter coefficients (from x^0 to x^1):\n\
             \n\
             P1(x) = 3x^2+2x+1\n\
             P2(x) = 5x+4\n\
             \n\
             [Results]\n\
             P1 + P2 = 3x^2+7x+5\n\
             P1 - P2 = 3x^2-3x-3\n\
             P1 * P2 = 15x^3+22x^2+13x+4\n\
             \n\
             Enter value of x to evaluate P1(x): P1(2) = 17\n"
        );
    }

    #[test]
    fn test_fractional_evaluation_point() {
        let (code, out, _) = run_session("1 0 2\n0 1\n0.5\n");
        assert_eq!(code, 0);
        assert!(out.ends_with("P1(0.5) = 1\n"));
    }

    #[test]
    fn test_malformed_coefficient_fails() {
        let (code, out, err) = run_session("2\n1 oops 3\n");

        assert_eq!(code, 1);
        assert_eq!(err, "error: Invalid number format: 'oops' at positions 5-8\n");
        assert!(!out.contains("[Results]"));
    }

    #[test]
    fn test_missing_evaluation_point_fails() {
        let (code, out, err) = run_session("0 1\n0 2\n");

        assert_eq!(code, 1);
        assert_eq!(err, "error: Unexpected end of input, expected a number\n");
        assert!(out.contains("P1 * P2 = 2\n"));
    }
}
