//! Row transforms.
//!
//! A `RowTransform` takes one row and returns either the row to write or
//! `None` to drop it. Exactly one transform is built per run, before any
//! input is read, and it holds no mutable state.

use crate::Row;
use crate::combinator::MatchMode;
use crate::cut::cut;
use crate::predicate::{FieldFilter, PredicateKind};

/// A single row-in, row-or-nothing-out step.
pub trait RowTransform {
    /// Transform one row. `None` means the row is dropped.
    fn apply(&self, row: Row) -> Option<Row>;

    /// The display name of this transform.
    fn name(&self) -> &str;
}

/// CUT - projects rows onto a list of field indices.
#[derive(Debug, Clone)]
pub struct CutTransform {
    fields: Vec<usize>,
}

impl CutTransform {
    pub fn new(fields: Vec<usize>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[usize] {
        &self.fields
    }
}

impl RowTransform for CutTransform {
    fn apply(&self, row: Row) -> Option<Row> {
        let output = cut(&row, &self.fields);
        if output.is_empty() { None } else { Some(output) }
    }

    fn name(&self) -> &str {
        "cut"
    }
}

/// PREFIX / MATCH / REGEX - keeps rows whose fields satisfy the filters.
#[derive(Debug, Clone)]
pub struct FilterTransform {
    kind: PredicateKind,
    mode: MatchMode,
    filters: Vec<FieldFilter>,
}

impl FilterTransform {
    pub fn new(kind: PredicateKind, mode: MatchMode, filters: Vec<FieldFilter>) -> Self {
        Self {
            kind,
            mode,
            filters,
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn filters(&self) -> &[FieldFilter] {
        &self.filters
    }
}

impl RowTransform for FilterTransform {
    fn apply(&self, row: Row) -> Option<Row> {
        // A zero-field row is never written, whatever the filters say.
        self.mode
            .apply(row, &self.filters)
            .filter(|r| !r.is_empty())
    }

    fn name(&self) -> &str {
        self.kind.name()
    }
}
