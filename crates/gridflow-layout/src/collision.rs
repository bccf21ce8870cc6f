#![forbid(unsafe_code)]

//! Collision predicate and queries.
//!
//! Two items collide when their rectangles share a cell and they are not the
//! same item. Identity is the [`ItemId`](crate::ItemId), so an item never
//! collides with itself even if a caller holds two copies of it.
//!
//! Compaction and cascades run on [`collides`], [`first_overlap`] and
//! [`rect_is_free`]. [`first_collision`] and [`all_collisions`] are the same
//! queries shaped for hosts that hold item slices.

use crate::geometry::GridRect;
use crate::item::LayoutItem;

/// Whether `a` and `b` overlap and are distinct items.
#[inline]
#[must_use]
pub fn collides(a: &LayoutItem, b: &LayoutItem) -> bool {
    a.id != b.id && a.rect().overlaps(&b.rect())
}

/// First candidate, in candidate order, that collides with `item`.
#[must_use]
pub fn first_collision<'a>(
    candidates: &'a [LayoutItem],
    item: &LayoutItem,
) -> Option<&'a LayoutItem> {
    candidates.iter().find(|other| collides(other, item))
}

/// Every candidate that collides with `item`, in candidate order.
#[must_use]
pub fn all_collisions<'a>(candidates: &'a [LayoutItem], item: &LayoutItem) -> Vec<&'a LayoutItem> {
    candidates
        .iter()
        .filter(|other| collides(other, item))
        .collect()
}

/// First rectangle, in slice order, that shares a cell with `rect`.
#[must_use]
pub fn first_overlap<'a>(rects: &'a [GridRect], rect: &GridRect) -> Option<&'a GridRect> {
    rects.iter().find(|other| other.overlaps(rect))
}

/// Whether `rect` overlaps none of `items`.
///
/// The rectangle has no identity, so every item counts, including the one
/// the caller may be planning to move into `rect`.
#[must_use]
pub fn rect_is_free(items: &[LayoutItem], rect: &GridRect) -> bool {
    !items.iter().any(|item| item.rect().overlaps(rect))
}
