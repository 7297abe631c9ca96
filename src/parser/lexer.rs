use crate::Span;
use crate::parser::tokens::Token;

/// Splits text into whitespace-separated tokens
///
/// Spans are shifted by `offset` so that tokens from successive lines of a
/// stream keep positions relative to the start of the stream.
pub(crate) struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_offset(input, 0)
    }

    pub fn with_offset(input: &'a str, offset: usize) -> Self {
        Lexer {
            input,
            pos: 0,
            offset,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let rest = &self.input[self.pos..];
        let start = self.pos + rest.find(|c: char| !c.is_whitespace())?;
        let len = self.input[start..]
            .find(char::is_whitespace)
            .unwrap_or(self.input.len() - start);
        let end = start + len;
        self.pos = end;

        Some(Token::new(
            &self.input[start..end],
            Span::new(self.offset + start, self.offset + end),
        ))
    }
}
