use std::fmt;
use std::io;

/// Source location span for error reporting
/// Represents a range of bytes in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (0-indexed byte offset)
    pub start: usize,
    /// End position (exclusive, 0-indexed byte offset)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Check if this span has valid location info
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Format the span for display (1-indexed for users)
    pub fn display(&self) -> String {
        if !self.is_valid() {
            String::new()
        } else if self.end - self.start == 1 {
            format!(" at position {}", self.start + 1)
        } else {
            format!(" at positions {}-{}", self.start + 1, self.end)
        }
    }
}

/// Errors that can occur while constructing or reading polynomials
///
/// Arithmetic and evaluation are total, so every variant here comes from
/// either degree validation or the token reader.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyError {
    // Parsing errors
    InvalidNumber {
        value: String,
        span: Option<Span>,
    },
    InvalidDegree {
        value: String,
        span: Option<Span>,
    },
    UnexpectedEndOfInput {
        expected: String,
    },
    TrailingInput {
        token: String,
        span: Option<Span>,
    },

    // Validation errors
    NegativeDegree {
        value: i64,
        span: Option<Span>,
    },

    // Safety limits
    DegreeTooLarge {
        degree: usize,
        max: usize,
        span: Option<Span>,
    },

    // Underlying reader/writer failure
    Io {
        kind: io::ErrorKind,
        message: String,
    },
}

impl PolyError {
    /// Create InvalidNumber without span
    pub fn invalid_number(value: impl Into<String>) -> Self {
        PolyError::InvalidNumber {
            value: value.into(),
            span: None,
        }
    }

    /// Create InvalidNumber with span
    pub fn invalid_number_at(value: impl Into<String>, span: Span) -> Self {
        PolyError::InvalidNumber {
            value: value.into(),
            span: Some(span),
        }
    }

    /// Create InvalidDegree with span
    pub fn invalid_degree_at(value: impl Into<String>, span: Span) -> Self {
        PolyError::InvalidDegree {
            value: value.into(),
            span: Some(span),
        }
    }

    /// Create UnexpectedEndOfInput naming what the reader was waiting for
    pub fn end_of_input(expected: impl Into<String>) -> Self {
        PolyError::UnexpectedEndOfInput {
            expected: expected.into(),
        }
    }

    /// True for errors caused by malformed or missing tokens
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            PolyError::InvalidNumber { .. }
                | PolyError::InvalidDegree { .. }
                | PolyError::UnexpectedEndOfInput { .. }
                | PolyError::TrailingInput { .. }
        )
    }
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyError::InvalidNumber { value, span } => {
                write!(
                    f,
                    "Invalid number format: '{}'{}",
                    value,
                    span.map_or(String::new(), |s| s.display())
                )
            }
            PolyError::InvalidDegree { value, span } => {
                write!(
                    f,
                    "Invalid degree: '{}' is not an integer{}",
                    value,
                    span.map_or(String::new(), |s| s.display())
                )
            }
            PolyError::UnexpectedEndOfInput { expected } => {
                write!(f, "Unexpected end of input, expected {}", expected)
            }
            PolyError::TrailingInput { token, span } => {
                write!(
                    f,
                    "Unexpected trailing token '{}'{}",
                    token,
                    span.map_or(String::new(), |s| s.display())
                )
            }
            PolyError::NegativeDegree { value, span } => {
                write!(
                    f,
                    "Degree must be non-negative, got {}{}",
                    value,
                    span.map_or(String::new(), |s| s.display())
                )
            }
            PolyError::DegreeTooLarge { degree, max, span } => {
                write!(
                    f,
                    "Degree {} exceeds maximum limit {}{}",
                    degree,
                    max,
                    span.map_or(String::new(), |s| s.display())
                )
            }
            PolyError::Io { kind, message } => {
                write!(f, "I/O error ({:?}): {}", kind, message)
            }
        }
    }
}

impl std::error::Error for PolyError {}

impl From<io::Error> for PolyError {
    fn from(err: io::Error) -> Self {
        PolyError::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
