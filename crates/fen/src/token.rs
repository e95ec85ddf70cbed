//! Delimiter based tokenizer.
//!
//! All scanning state lives in the [`Tokenizer`] value, so separate parses never share a cursor.

use std::iter::FusedIterator;

/// A slice of the input, located by byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub offset: usize,
    pub len: usize,
    /// Set on the token that runs into the end of the input.
    pub is_last: bool,
}

impl Token {
    /// The text this token covers in `input`.
    ///
    /// `input` must be the string the token was produced from.
    #[inline]
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.offset..self.offset + self.len]
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Splits a string on a single delimiter character, one token per call.
///
/// Consecutive delimiters yield empty tokens; callers decide whether to skip them.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    delim: char,
    /// Where the next scan starts. `None` once the last token was produced.
    cursor: Option<usize>,
}

impl<'a> Tokenizer<'a> {
    #[inline]
    pub const fn new(input: &'a str, delim: char) -> Self {
        Self {
            input,
            delim,
            cursor: Some(0),
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.cursor?;
        let rest = &self.input[offset..];

        let token = match rest.find(self.delim) {
            Some(len) => {
                self.cursor = Some(offset + len + self.delim.len_utf8());
                Token {
                    offset,
                    len,
                    is_last: false,
                }
            }
            None => {
                self.cursor = None;
                Token {
                    offset,
                    len: rest.len(),
                    is_last: true,
                }
            }
        };

        Some(token)
    }
}

impl FusedIterator for Tokenizer<'_> {}
