#![forbid(unsafe_code)]

//! Grid-unit rectangles.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in grid units (columns and rows).
///
/// Origin is the top-left corner of the grid. Edges follow half-open
/// interval semantics: `x..right()` and `y..bottom()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridRect {
    /// Left column (inclusive).
    pub x: u32,
    /// Top row (inclusive).
    pub y: u32,
    /// Width in columns.
    pub w: u32,
    /// Height in rows.
    pub h: u32,
}

impl GridRect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Same rectangle placed on another row.
    #[inline]
    #[must_use]
    pub const fn with_y(self, y: u32) -> Self {
        Self { y, ..self }
    }

    /// Whether the two rectangles share at least one column.
    #[inline]
    pub const fn overlaps_columns(&self, other: &GridRect) -> bool {
        self.x < other.right() && other.x < self.right()
    }

    /// Whether the two rectangles share at least one cell.
    ///
    /// Touching edges do not overlap.
    #[inline]
    pub const fn overlaps(&self, other: &GridRect) -> bool {
        self.overlaps_columns(other)
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
