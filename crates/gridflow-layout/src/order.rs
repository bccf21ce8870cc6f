#![forbid(unsafe_code)]

//! Row-major ordering of layout items.
//!
//! Items are ordered by `(y, x)` ascending. Items sharing a top-left corner
//! keep their relative input order.

use crate::item::LayoutItem;

/// Indices of `items` in row-major order.
///
/// The slice itself is left untouched, so callers can keep reporting in the
/// original order while scanning in this one.
#[must_use]
pub fn row_major_order(items: &[LayoutItem]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| (items[i].y, items[i].x));
    order
}

/// Sort `items` in place by row, then column.
pub fn sort_by_row_then_column(items: &mut [LayoutItem]) {
    items.sort_by_key(|item| (item.y, item.x));
}
