//! Run configuration.
//!
//! Built once at startup and passed by reference to command dispatch and the
//! row pipeline.

use crate::error::{FilterError, Result};

/// Settings fixed for the lifetime of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Field delimiter for both reader and writer.
    pub delimiter: u8,
    /// Quote character for both reader and writer.
    pub quote: u8,
    /// Lines starting with this byte are skipped by the reader.
    pub comment: Option<u8>,
    /// AND the filters instead of OR-ing them. Ignored by `cut`.
    pub match_all: bool,
    /// Write a single cut field as a bare string.
    pub single: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            comment: None,
            match_all: false,
            single: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    pub fn with_comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }

    pub fn with_match_all(mut self, match_all: bool) -> Self {
        self.match_all = match_all;
        self
    }

    pub fn with_single(mut self, single: bool) -> Self {
        self.single = single;
        self
    }
}

/// Parse a character option such as `-d` into a single byte.
///
/// The value must be exactly one ASCII character. `\t` is accepted as a
/// spelling of tab, since a literal tab is awkward to pass on most shells.
pub fn parse_char_option(option: &'static str, value: &str) -> Result<u8> {
    if value == "\\t" {
        return Ok(b'\t');
    }
    match value.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(FilterError::InvalidOption {
            option,
            value: value.to_string(),
        }),
    }
}
