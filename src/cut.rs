//! Column projection.

use crate::Row;

/// Project `row` onto `fields`, in order. Repeats are emitted again and
/// indices past the end of the row are skipped.
pub fn cut(row: &Row, fields: &[usize]) -> Row {
    let mut output = Row::with_capacity(row.as_slice().len(), fields.len());
    for value in fields.iter().filter_map(|&i| row.get(i)) {
        output.push_field(value);
    }
    output
}
