use crate::Span;

/// A whitespace-delimited token with its byte span in the source
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Token {
            text: text.into(),
            span,
        }
    }
}
