#![forbid(unsafe_code)]

//! Layout item records exchanged with the hosting grid component.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::GridRect;

/// Stable, opaque identity of a layout item.
///
/// Unique within one layout. Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from anything string-like.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rectangular item placed on the grid.
///
/// Placement operations only ever change `x` and `y`; `w` and `h` are
/// expected to be non-zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutItem {
    pub id: ItemId,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl LayoutItem {
    /// Create a new item.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
        }
    }

    /// The cells covered by this item.
    #[inline]
    #[must_use]
    pub fn rect(&self) -> GridRect {
        GridRect::new(self.x, self.y, self.w, self.h)
    }

    /// First row below the item.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.rect().bottom()
    }
}
