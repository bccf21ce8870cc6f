#![forbid(unsafe_code)]

//! Id-addressed layout facade.
//!
//! [`Layout`] owns the item list for the duration of each operation and is
//! what the hosting grid component talks to: it addresses items by
//! [`ItemId`], checks preconditions, and runs compaction after interactive
//! edits when [`PlacementConfig::compact_after_interaction`] is set.
//!
//! # Usage
//!
//! ```
//! use gridflow_layout::{Layout, LayoutItem};
//!
//! let mut layout = Layout::new(vec![
//!     LayoutItem::new("a", 0, 0, 2, 2),
//!     LayoutItem::new("b", 0, 2, 2, 2),
//! ]);
//! layout.validate().expect("well-formed layout");
//!
//! let outcome = layout.move_item(&"a".into(), None, Some(1), true).expect("known id");
//! assert_eq!(outcome.displaced.len(), 1);
//! assert_eq!(layout.bottom(), 5);
//! ```

use std::fmt;

use rustc_hash::FxHashSet;

use crate::cascade::{MoveOutcome, move_element};
use crate::collision::collides;
use crate::compact::compact_in_place;
use crate::config::PlacementConfig;
use crate::item::{ItemId, LayoutItem};

/// Number of occupied rows: the largest `y + h`, or 0 for no items.
#[must_use]
pub fn bottom(items: &[LayoutItem]) -> u32 {
    items.iter().map(LayoutItem::bottom).max().unwrap_or(0)
}

/// Errors from id-addressed layout operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No item with this id exists in the layout.
    UnknownItem { id: ItemId },
    /// Two items share the same id.
    DuplicateId { id: ItemId },
    /// An item has zero width or height.
    ZeroSize { id: ItemId, w: u32, h: u32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownItem { id } => write!(f, "no layout item with id '{id}'"),
            Self::DuplicateId { id } => write!(f, "layout item id '{id}' is used more than once"),
            Self::ZeroSize { id, w, h } => {
                write!(f, "layout item '{id}' has empty size {w}x{h}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// A grid layout and the placement settings applied to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    items: Vec<LayoutItem>,
    config: PlacementConfig,
}

impl Layout {
    /// Wrap `items` with the default placement settings.
    #[must_use]
    pub fn new(items: Vec<LayoutItem>) -> Self {
        Self::with_config(items, PlacementConfig::default())
    }

    #[must_use]
    pub fn with_config(items: Vec<LayoutItem>, config: PlacementConfig) -> Self {
        Self { items, config }
    }

    #[must_use]
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<LayoutItem> {
        self.items
    }

    #[must_use]
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the item with `id` in the original order.
    #[must_use]
    pub fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&LayoutItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Number of occupied rows.
    #[must_use]
    pub fn bottom(&self) -> u32 {
        bottom(&self.items)
    }

    /// Every overlapping pair, as `(earlier, later)` indices.
    #[must_use]
    pub fn collisions(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.items.iter().enumerate() {
            for (j, b) in self.items.iter().enumerate().skip(i + 1) {
                if collides(a, b) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Check the caller-side preconditions: non-empty sizes and unique ids.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, scanning in item order.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = FxHashSet::default();
        for item in &self.items {
            if item.w == 0 || item.h == 0 {
                return Err(LayoutError::ZeroSize {
                    id: item.id.clone(),
                    w: item.w,
                    h: item.h,
                });
            }
            if !seen.insert(&item.id) {
                return Err(LayoutError::DuplicateId {
                    id: item.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Pull every item up as far as it goes.
    pub fn compact(&mut self) {
        compact_in_place(&mut self.items);
    }

    /// Move one item and displace whatever it lands on.
    ///
    /// Does not compact; see [`drag`](Self::drag) for the interactive path.
    ///
    /// # Errors
    ///
    /// [`LayoutError::UnknownItem`] if `id` is not in the layout.
    pub fn move_item(
        &mut self,
        id: &ItemId,
        x: Option<u32>,
        y: Option<u32>,
        is_user_action: bool,
    ) -> Result<MoveOutcome, LayoutError> {
        let index = self.require(id)?;
        Ok(move_element(
            &mut self.items,
            index,
            x,
            y,
            is_user_action,
            &self.config,
        ))
    }

    /// A user drag step: move as a user action, then compact if configured.
    ///
    /// # Errors
    ///
    /// [`LayoutError::UnknownItem`] if `id` is not in the layout.
    pub fn drag(
        &mut self,
        id: &ItemId,
        x: Option<u32>,
        y: Option<u32>,
    ) -> Result<MoveOutcome, LayoutError> {
        let outcome = self.move_item(id, x, y, true)?;
        self.settle();
        Ok(outcome)
    }

    /// A user resize step: apply the new size, push away what the item now
    /// covers, then compact if configured.
    ///
    /// # Errors
    ///
    /// [`LayoutError::UnknownItem`] if `id` is not in the layout, or
    /// [`LayoutError::ZeroSize`] if `w` or `h` is zero. The layout is left
    /// untouched on error.
    pub fn resize(&mut self, id: &ItemId, w: u32, h: u32) -> Result<MoveOutcome, LayoutError> {
        let index = self.require(id)?;
        if w == 0 || h == 0 {
            return Err(LayoutError::ZeroSize { id: id.clone(), w, h });
        }
        self.items[index].w = w;
        self.items[index].h = h;
        let outcome = move_element(&mut self.items, index, None, None, true, &self.config);
        self.settle();
        Ok(outcome)
    }

    fn require(&self, id: &ItemId) -> Result<usize, LayoutError> {
        self.index_of(id)
            .ok_or_else(|| LayoutError::UnknownItem { id: id.clone() })
    }

    fn settle(&mut self) {
        if self.config.compact_after_interaction {
            self.compact();
        }
    }
}

impl From<Vec<LayoutItem>> for Layout {
    fn from(items: Vec<LayoutItem>) -> Self {
        Self::new(items)
    }
}
