//! # csv-filter
//!
//! A streaming filter for delimited text.
//!
//! Rows are read one at a time, pushed through a single row transform and
//! written straight back out in the same delimited format. Fields are
//! addressed by zero-based position only.
//!
//! ## Overview
//!
//! - **cut**: project each row onto a list of field indices
//! - **prefix** / **match** / **regex**: keep rows whose fields start with,
//!   equal, or contain a match for a pattern
//! - **AND / OR**: predicate filters combine with any-match by default, or
//!   all-match when `match_all` is set
//!
//! The transform is built and validated once, before any input is read.
//!
//! ## Example
//!
//! ```
//! use csv_filter::{Config, filter_text};
//!
//! let input = "a,foo\nb,bar\nc,foo\n";
//!
//! let kept = filter_text(input, "match", &["1", "foo"], &Config::default()).unwrap();
//! assert_eq!(kept, "a,foo\nc,foo\n");
//!
//! let firsts = filter_text(input, "cut", &["0"], &Config::default()).unwrap();
//! assert_eq!(firsts, "a\nb\nc\n");
//! ```

pub mod combinator;
pub mod command;
pub mod config;
pub mod cut;
pub mod error;
pub mod field;
pub mod pipeline;
pub mod predicate;
pub mod transform;

/// One record of the delimited stream. Fields are raw bytes.
pub type Row = csv::ByteRecord;

pub use combinator::{MatchMode, all, any};
pub use command::{Command, build_transform, parse_command};
pub use config::{Config, parse_char_option};
pub use cut::cut;
pub use error::{FilterError, Result};
pub use field::{parse_field_index, parse_field_indices};
pub use pipeline::{RunSummary, filter_text, run};
pub use predicate::{
    FieldFilter, Matcher, PredicateKind, build_filters, exact_filters, prefix_filters,
    regex_filters,
};
pub use transform::{CutTransform, FilterTransform, RowTransform};
