//! Error type shared by every stage of the filter.
//!
//! Nothing here is recoverable: the binary prints the error once and exits.
//! Setup errors (bad command, arity, field index, pattern, option) are
//! reported before any input is read.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building or running a row filter.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Missing or inconsistent command-line usage.
    #[error("usage: {0}")]
    Usage(String),

    /// The subcommand name is not one of cut, prefix, match, regex.
    #[error("unknown command '{0}' (try cut, prefix, match or regex)")]
    UnknownCommand(String),

    /// Wrong number of arguments for a subcommand.
    #[error("{command} takes {expected}, got {count} argument(s)")]
    InvalidArgumentCount {
        command: &'static str,
        expected: &'static str,
        count: usize,
    },

    /// A field reference is not a non-negative base-10 integer.
    #[error("invalid field index '{token}'")]
    InvalidFieldIndex { token: String },

    /// A regex pattern failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A character option was not exactly one ASCII character.
    #[error("invalid value '{value}' for {option}: expected a single ASCII character")]
    InvalidOption { option: &'static str, value: String },

    /// An input or output file could not be opened.
    #[error("cannot open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The delimited stream could not be parsed.
    #[error("error reading line {line}: {source}")]
    InputParse {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// The output stream rejected a write or flush.
    #[error("error writing output: {0}")]
    OutputWrite(#[source] csv::Error),
}

impl FilterError {
    /// True for errors detected while building the transform.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            FilterError::Usage(_)
                | FilterError::UnknownCommand(_)
                | FilterError::InvalidArgumentCount { .. }
                | FilterError::InvalidFieldIndex { .. }
                | FilterError::InvalidPattern { .. }
                | FilterError::InvalidOption { .. }
        )
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_usage() { 2 } else { 1 }
    }
}

// Bare I/O errors only come from the output side: `--single` writes and the final flush.
impl From<io::Error> for FilterError {
    fn from(err: io::Error) -> Self {
        FilterError::OutputWrite(csv::Error::from(err))
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_exit_2() {
        let err = FilterError::InvalidFieldIndex {
            token: "abc".to_string(),
        };
        assert!(err.is_usage());
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "invalid field index 'abc'");
    }

    #[test]
    fn test_runtime_errors_exit_1() {
        let err = FilterError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(!err.is_usage());
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("error writing output"));
    }

    #[test]
    fn test_argument_count_message() {
        let err = FilterError::InvalidArgumentCount {
            command: "prefix",
            expected: "one or more <field> <pattern> pairs",
            count: 3,
        };
        assert_eq!(
            err.to_string(),
            "prefix takes one or more <field> <pattern> pairs, got 3 argument(s)"
        );
    }
}
