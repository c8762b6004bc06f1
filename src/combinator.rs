//! AND / OR reduction of field filters over one row.
//!
//! Filters are evaluated in list order and both reducers short-circuit.
//! A filter whose field is past the end of the row fails under AND and is
//! skipped under OR.

use crate::Row;
use crate::predicate::FieldFilter;

/// How multiple filters combine. Fixed for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Every filter must match (`-a`).
    All,
    /// At least one filter must match.
    #[default]
    Any,
}

impl MatchMode {
    pub fn from_match_all(match_all: bool) -> Self {
        if match_all {
            MatchMode::All
        } else {
            MatchMode::Any
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MatchMode::All => "all",
            MatchMode::Any => "any",
        }
    }

    /// Reduce `filters` over `row` with this mode.
    pub fn apply(self, row: Row, filters: &[FieldFilter]) -> Option<Row> {
        match self {
            MatchMode::All => all(row, filters),
            MatchMode::Any => any(row, filters),
        }
    }
}

/// Keep the row only if every filter's field exists and matches.
pub fn all(row: Row, filters: &[FieldFilter]) -> Option<Row> {
    for filter in filters {
        if filter.test(&row) != Some(true) {
            return None;
        }
    }
    Some(row)
}

/// Keep the row if any in-range filter matches. First match wins.
pub fn any(row: Row, filters: &[FieldFilter]) -> Option<Row> {
    for filter in filters {
        if filter.test(&row) == Some(true) {
            return Some(row);
        }
    }
    None
}
