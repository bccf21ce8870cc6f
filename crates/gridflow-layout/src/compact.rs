#![forbid(unsafe_code)]

//! Vertical compaction.
//!
//! Items are scanned in row-major order. Each one is pulled toward row 0
//! until it would hit an item that was already placed, then dropped onto
//! the bottom of whatever it still overlaps. An item only ever collides with
//! items placed before it, so the result depends on scan order alone.
//!
//! # Invariants
//!
//! 1. No two items overlap in the output.
//! 2. `x`, `w` and `h` are never changed.
//! 3. Output order matches input order.
//! 4. `compact(compact(l)) == compact(l)`.

use crate::collision::first_overlap;
use crate::geometry::GridRect;
use crate::item::LayoutItem;
use crate::order::row_major_order;

/// Compact a copy of `items`, preserving input order.
#[must_use]
pub fn compact(items: &[LayoutItem]) -> Vec<LayoutItem> {
    let mut out = items.to_vec();
    compact_in_place(&mut out);
    out
}

/// Compact `items` without reordering the slice.
pub fn compact_in_place(items: &mut [LayoutItem]) {
    let mut placed: Vec<GridRect> = Vec::with_capacity(items.len());

    for idx in row_major_order(items) {
        let rect = settle(&placed, items[idx].rect());

        #[cfg(feature = "tracing")]
        {
            if rect.y != items[idx].y {
                tracing::trace!(
                    id = %items[idx].id,
                    from = items[idx].y,
                    to = rect.y,
                    "compact: item settled"
                );
            }
        }

        items[idx].y = rect.y;
        placed.push(rect);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(items = items.len(), "compact: done");
}

/// Pull `rect` up as far as it goes, then drop it below anything it still hits.
///
/// The pull-up lands in one step: on row 0, or on the lowest row above the
/// start where a placed rectangle in the same columns is hit. Each drop
/// clears one blocker for good, so the drop loop runs at most once per
/// placed rectangle.
fn settle(placed: &[GridRect], mut rect: GridRect) -> GridRect {
    if first_overlap(placed, &rect).is_none() {
        rect.y = highest_blocked_row(placed, &rect).unwrap_or(0);
    }
    while let Some(blocker) = first_overlap(placed, &rect) {
        rect.y = blocker.bottom();
    }
    rect
}

/// Lowest row above `rect.y` at which `rect` would overlap something.
fn highest_blocked_row(placed: &[GridRect], rect: &GridRect) -> Option<u32> {
    placed
        .iter()
        .filter(|other| rect.overlaps_columns(other))
        .filter_map(|other| {
            let row = other.bottom().min(rect.y).checked_sub(1)?;
            (u64::from(row) + u64::from(rect.h) > u64::from(other.y)).then_some(row)
        })
        .max()
}
