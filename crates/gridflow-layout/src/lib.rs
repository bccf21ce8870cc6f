#![forbid(unsafe_code)]

//! Placement core for draggable, resizable dashboard grids.
//!
//! Items are rectangles on an integer row/column grid. This crate detects
//! overlaps, compacts layouts vertically, and resolves interactive moves by
//! cascading colliding items out of the way. Pixel conversion, rendering,
//! and persistence belong to the host.
//!
//! # Usage
//!
//! ```
//! use gridflow_layout::{LayoutItem, bottom, compact};
//!
//! let items = vec![
//!     LayoutItem::new("a", 0, 0, 1, 1),
//!     LayoutItem::new("b", 0, 0, 1, 1),
//! ];
//! let settled = compact(&items);
//! assert_eq!(settled[1].y, 1);
//! assert_eq!(bottom(&settled), 2);
//! ```

pub mod cascade;
pub mod collision;
pub mod compact;
pub mod config;
pub mod geometry;
pub mod item;
pub mod layout;
pub mod order;

pub use cascade::{MoveOutcome, move_element};
pub use collision::{all_collisions, collides, first_collision, first_overlap, rect_is_free};
pub use compact::{compact, compact_in_place};
pub use config::{DeadzoneRatio, PlacementConfig, ZeroDenominator};
pub use geometry::GridRect;
pub use item::{ItemId, LayoutItem};
pub use layout::{Layout, LayoutError, bottom};
pub use order::{row_major_order, sort_by_row_then_column};
