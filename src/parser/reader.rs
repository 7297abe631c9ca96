//! Streaming token reader over `BufRead`
//!
//! Tokens are pulled one line at a time, so a single stream can carry several
//! polynomials followed by other values (e.g. an evaluation point).

use super::lexer::Lexer;
use super::tokens::Token;
use super::{DEFAULT_MAX_DEGREE, TokenSource, parse_scalar, read_polynomial};
use crate::helpers::trace;
use crate::{MathScalar, PolyError, Polynomial};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Reads polynomials and scalars from a buffered input stream
///
/// With prompts enabled it writes `Enter degree: ` before the degree and
/// `Enter coefficients (from x^0 to x^d):` before the coefficients.
///
/// # Example
/// ```
/// use dense_poly::{PolyReader, Polynomial};
///
/// let input = "2 1 2 3\n1 4 5\n2.0\n";
/// let mut reader = PolyReader::from_input(input.as_bytes());
///
/// let p1: Polynomial = reader.read_polynomial().unwrap();
/// let p2: Polynomial = reader.read_polynomial().unwrap();
/// let x: f64 = reader.read_value().unwrap();
/// assert_eq!((p1 * p2).evaluate(x), 17.0 * 14.0);
/// ```
pub struct PolyReader<R, W = io::Sink> {
    input: R,
    output: W,
    prompts: bool,
    max_degree: usize,
    pending: VecDeque<Token>,
    /// Bytes consumed so far, used to build stream-relative spans
    offset: usize,
    line: Vec<u8>,
}

impl<R: BufRead> PolyReader<R, io::Sink> {
    /// Create a reader that never writes prompts
    pub fn from_input(input: R) -> Self {
        PolyReader::new(input, io::sink())
    }
}

impl<R: BufRead, W: Write> PolyReader<R, W> {
    /// Create a reader; prompts go to `output` once enabled
    pub fn new(input: R, output: W) -> Self {
        PolyReader {
            input,
            output,
            prompts: false,
            max_degree: DEFAULT_MAX_DEGREE,
            pending: VecDeque::new(),
            offset: 0,
            line: Vec::new(),
        }
    }

    /// Enable or disable interactive prompts
    pub fn prompts(mut self, enabled: bool) -> Self {
        self.prompts = enabled;
        self
    }

    /// Set the largest degree accepted before allocating coefficients
    pub fn max_degree(mut self, max: usize) -> Self {
        self.max_degree = max;
        self
    }

    /// Access the prompt output stream
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the reader and return the underlying streams
    ///
    /// Tokens already buffered from a partially consumed line are dropped.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Read a degree followed by its coefficients
    ///
    /// # Errors
    /// Returns `PolyError` on malformed tokens, premature end of input,
    /// an out-of-range degree, or an I/O failure.
    pub fn read_polynomial<T: MathScalar>(&mut self) -> Result<Polynomial<T>, PolyError> {
        let max_degree = self.max_degree;
        read_polynomial(self, max_degree)
    }

    /// Read a polynomial and store it in `target`
    ///
    /// `target` is replaced only after the full read succeeds; on error it
    /// keeps its previous value. Tokens consumed by the failed read are not
    /// returned to the stream.
    ///
    /// # Errors
    /// Same as [`PolyReader::read_polynomial`].
    pub fn read_into<T: MathScalar>(&mut self, target: &mut Polynomial<T>) -> Result<(), PolyError> {
        *target = self.read_polynomial()?;
        Ok(())
    }

    /// Read a single scalar value
    ///
    /// # Errors
    /// Returns `PolyError::InvalidNumber` for a non-numeric token and
    /// `PolyError::UnexpectedEndOfInput` if the stream is exhausted.
    pub fn read_value<T: MathScalar>(&mut self) -> Result<T, PolyError> {
        let token = self
            .next_token()?
            .ok_or_else(|| PolyError::end_of_input("a number"))?;
        parse_scalar(&token)
    }

    fn prompt(&mut self, args: std::fmt::Arguments<'_>) -> Result<(), PolyError> {
        if self.prompts {
            self.output.write_fmt(args)?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Pull lines until at least one token is buffered or input ends
    ///
    /// The offset advances by the raw byte count of every line, including a
    /// line rejected as invalid UTF-8, so later spans stay stream-relative.
    fn fill(&mut self) -> Result<bool, PolyError> {
        while self.pending.is_empty() {
            self.line.clear();
            let n = self.input.read_until(b'\n', &mut self.line)?;
            if n == 0 {
                return Ok(false);
            }
            let start = self.offset;
            self.offset += n;

            let text = std::str::from_utf8(&self.line).map_err(|e| PolyError::Io {
                kind: io::ErrorKind::InvalidData,
                message: format!("line at byte {} is not valid UTF-8: {}", start, e),
            })?;
            self.pending.extend(Lexer::with_offset(text, start));
        }
        Ok(true)
    }
}

impl<R: BufRead, W: Write> TokenSource for PolyReader<R, W> {
    fn next_token(&mut self) -> Result<Option<Token>, PolyError> {
        if !self.fill()? {
            trace(format_args!("end of input at byte {}", self.offset));
            return Ok(None);
        }
        let token = self.pending.pop_front();
        if let Some(t) = &token {
            trace(format_args!("token '{}' at {:?}", t.text, t.span));
        }
        Ok(token)
    }

    fn before_degree(&mut self) -> Result<(), PolyError> {
        self.prompt(format_args!("Enter degree: "))
    }

    fn before_coefficients(&mut self, degree: usize) -> Result<(), PolyError> {
        self.prompt(format_args!(
            "Enter coefficients (from x^0 to x^{}):\n",
            degree
        ))
    }
}
