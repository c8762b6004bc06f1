//! Field-bound match predicates.
//!
//! Each predicate subcommand takes a flat list of `<field> <pattern>` pairs.
//! A pair becomes a [`FieldFilter`]: the field index plus a [`Matcher`] that
//! tests that field's value.

use regex::bytes::Regex;

use crate::Row;
use crate::error::{FilterError, Result};
use crate::field::parse_field_index;

/// Which family of predicate a subcommand builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateKind {
    /// Field starts with the pattern.
    Prefix,
    /// Field equals the pattern.
    Exact,
    /// Field contains a match of the regex.
    Regex,
}

impl PredicateKind {
    /// Canonical subcommand name, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            PredicateKind::Prefix => "prefix",
            PredicateKind::Exact => "match",
            PredicateKind::Regex => "regex",
        }
    }

    /// Build a matcher for one pattern. Regexes are compiled here, once.
    pub fn matcher(self, pattern: &str) -> Result<Matcher> {
        match self {
            PredicateKind::Prefix => Ok(Matcher::Prefix(pattern.to_string())),
            PredicateKind::Exact => Ok(Matcher::Exact(pattern.to_string())),
            PredicateKind::Regex => Regex::new(pattern)
                .map(Matcher::Regex)
                .map_err(|source| FilterError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                }),
        }
    }
}

/// A field test bound to nothing but its pattern.
///
/// Fields are compared as raw bytes, so input need not be UTF-8.
#[derive(Debug, Clone)]
pub enum Matcher {
    Prefix(String),
    Exact(String),
    Regex(Regex),
}

impl Matcher {
    /// Case-sensitive, byte-exact comparison; regexes match anywhere.
    pub fn matches(&self, value: &[u8]) -> bool {
        match self {
            Matcher::Prefix(prefix) => value.starts_with(prefix.as_bytes()),
            Matcher::Exact(expected) => value == expected.as_bytes(),
            Matcher::Regex(re) => re.is_match(value),
        }
    }
}

/// A matcher applied to one field of a row.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    pub field: usize,
    pub matcher: Matcher,
}

impl FieldFilter {
    pub fn new(field: usize, matcher: Matcher) -> Self {
        Self { field, matcher }
    }

    /// `None` when the row has no such field.
    pub fn test(&self, row: &Row) -> Option<bool> {
        row.get(self.field).map(|v| self.matcher.matches(v))
    }
}

/// Build filters from `<field> <pattern>` pairs, preserving pair order.
pub fn build_filters<S: AsRef<str>>(kind: PredicateKind, args: &[S]) -> Result<Vec<FieldFilter>> {
    if args.len() < 2 || args.len() % 2 != 0 {
        return Err(FilterError::InvalidArgumentCount {
            command: kind.name(),
            expected: "one or more <field> <pattern> pairs",
            count: args.len(),
        });
    }

    args.chunks_exact(2)
        .map(|pair| -> Result<FieldFilter> {
            let field = parse_field_index(pair[0].as_ref())?;
            let matcher = kind.matcher(pair[1].as_ref())?;
            Ok(FieldFilter::new(field, matcher))
        })
        .collect()
}

/// Filters where the field value starts with the pattern.
pub fn prefix_filters<S: AsRef<str>>(args: &[S]) -> Result<Vec<FieldFilter>> {
    build_filters(PredicateKind::Prefix, args)
}

/// Filters where the field value equals the pattern.
pub fn exact_filters<S: AsRef<str>>(args: &[S]) -> Result<Vec<FieldFilter>> {
    build_filters(PredicateKind::Exact, args)
}

/// Filters where the regex finds a match within the field value.
pub fn regex_filters<S: AsRef<str>>(args: &[S]) -> Result<Vec<FieldFilter>> {
    build_filters(PredicateKind::Regex, args)
}
