#![forbid(unsafe_code)]

//! Interactive move resolution.
//!
//! Moving one item can overlap others. Each overlapped item is displaced,
//! and displacing it can overlap further items, so resolution cascades
//! depth-first until nothing new needs to move.
//!
//! # Algorithm
//!
//! 1. Place the mover and mark it visited.
//! 2. Collect the items it overlaps in row-major order, reversed when the
//!    mover went up, so the nearest collision in the direction of travel
//!    comes first.
//! 3. For each collider not yet visited and not inside the upward deadzone,
//!    pick its new row and resolve it the same way before moving on to the
//!    next collider.
//!
//! A displaced item first tries the slot directly above the mover, but only
//! on the first level of a user-driven move. Everything else drifts down a
//! single row at a time; jumping straight below the mover reorders cascaded
//! items.
//!
//! # Invariants
//!
//! 1. The mover itself is never displaced.
//! 2. Each item is placed at most once per call, so a call does at most
//!    `n` placements and holds at most `n` frames.
//! 3. Only `x` of the mover and `y` of any item change.
//!
//! The result can still contain overlaps (items skipped because they were
//! already visited or inside the deadzone); run compaction afterwards to
//! settle them.

use rustc_hash::FxHashSet;

use crate::collision::{collides, rect_is_free};
use crate::config::PlacementConfig;
use crate::item::{ItemId, LayoutItem};
use crate::order::row_major_order;

/// What a single move did to the rest of the layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Items pushed out of the way, in the order they were displaced.
    pub displaced: Vec<ItemId>,
}

impl MoveOutcome {
    /// Whether nothing besides the mover changed position.
    #[must_use]
    pub fn is_isolated(&self) -> bool {
        self.displaced.is_empty()
    }
}

/// One pending level of the cascade.
struct Frame {
    mover: usize,
    user_action: bool,
    collisions: Vec<usize>,
    next: usize,
}

/// Move `items[index]` to (`x`, `y`) and push overlapped items out of the way.
///
/// `None` leaves that coordinate unchanged. `is_user_action` marks a direct
/// drag or resize, which lets first-level colliders jump above the mover when
/// there is room.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
pub fn move_element(
    items: &mut [LayoutItem],
    index: usize,
    x: Option<u32>,
    y: Option<u32>,
    is_user_action: bool,
    config: &PlacementConfig,
) -> MoveOutcome {
    let mut visited = FxHashSet::default();
    let mut outcome = MoveOutcome::default();
    let mut stack = vec![place(items, &mut visited, index, x, y, is_user_action)];

    while let Some(frame) = stack.last_mut() {
        let Some(&blocked) = frame.collisions.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let (mover, user_action) = (frame.mover, frame.user_action);

        if visited.contains(&blocked) {
            continue;
        }

        let depth = items[mover].y.saturating_sub(items[blocked].y);
        if depth > 0
            && config
                .upward_swap_deadzone
                .exceeded_by(depth, items[blocked].h)
        {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                mover = %items[mover].id,
                blocked = %items[blocked].id,
                depth,
                "cascade: inside upward deadzone, deferred"
            );
            continue;
        }

        let target = escape_row(items, mover, blocked, user_action);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            mover = %items[mover].id,
            blocked = %items[blocked].id,
            from = items[blocked].y,
            to = target,
            "cascade: displaced"
        );

        outcome.displaced.push(items[blocked].id.clone());
        let frame = place(items, &mut visited, blocked, None, Some(target), false);
        stack.push(frame);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        mover = %items[index].id,
        displaced = outcome.displaced.len(),
        "move: resolved"
    );

    outcome
}

/// Apply a position and open a frame for the collisions it causes.
fn place(
    items: &mut [LayoutItem],
    visited: &mut FxHashSet<usize>,
    index: usize,
    x: Option<u32>,
    y: Option<u32>,
    user_action: bool,
) -> Frame {
    let moving_up = y.is_some_and(|y| y < items[index].y);
    if let Some(x) = x {
        items[index].x = x;
    }
    if let Some(y) = y {
        items[index].y = y;
    }
    visited.insert(index);

    let mut order = row_major_order(items);
    if moving_up {
        order.reverse();
    }
    let collisions = order
        .into_iter()
        .filter(|&other| other != index && collides(&items[other], &items[index]))
        .collect();

    Frame {
        mover: index,
        user_action,
        collisions,
        next: 0,
    }
}

/// Row `blocked` should move to so it clears `mover`.
fn escape_row(items: &[LayoutItem], mover: usize, blocked: usize, user_action: bool) -> u32 {
    if user_action {
        let above = items[blocked]
            .rect()
            .with_y(items[mover].y.saturating_sub(items[blocked].h));
        if rect_is_free(items, &above) {
            return above.y;
        }
    }
    items[blocked].y.saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeadzoneRatio;

    fn item(id: &str, x: u32, y: u32, w: u32, h: u32) -> LayoutItem {
        LayoutItem::new(id, x, y, w, h)
    }

    fn rows(items: &[LayoutItem]) -> Vec<u32> {
        items.iter().map(|i| i.y).collect()
    }

    fn ids(outcome: &MoveOutcome) -> Vec<&str> {
        outcome.displaced.iter().map(ItemId::as_str).collect()
    }

    fn drag(
        items: &mut [LayoutItem],
        index: usize,
        x: Option<u32>,
        y: Option<u32>,
        user_action: bool,
    ) -> MoveOutcome {
        move_element(items, index, x, y, user_action, &PlacementConfig::default())
    }

    #[test]
    fn free_move_touches_nothing_else() {
        let mut items = vec![item("a", 0, 0, 1, 1), item("b", 3, 0, 1, 1)];
        let outcome = drag(&mut items, 0, Some(1), Some(4), true);
        assert!(outcome.is_isolated());
        assert_eq!(items[0], item("a", 1, 4, 1, 1));
        assert_eq!(items[1], item("b", 3, 0, 1, 1));
    }

    #[test]
    fn moving_down_pushes_collider_one_row() {
        let mut items = vec![item("a", 0, 0, 2, 2), item("b", 0, 2, 2, 2)];
        let outcome = drag(&mut items, 0, None, Some(1), true);
        assert_eq!(rows(&items), [1, 3]);
        assert_eq!(ids(&outcome), ["b"]);
    }

    #[test]
    fn collider_takes_the_free_slot_above_the_mover() {
        let mut items = vec![item("a", 0, 0, 1, 1), item("b", 0, 1, 1, 1)];
        let outcome = drag(&mut items, 0, None, Some(1), true);
        assert_eq!(rows(&items), [1, 0]);
        assert_eq!(ids(&outcome), ["b"]);
    }

    #[test]
    fn moving_up_swaps_with_the_item_above() {
        let mut items = vec![item("a", 0, 0, 1, 1), item("b", 0, 1, 1, 1)];
        drag(&mut items, 1, None, Some(0), true);
        assert_eq!(rows(&items), [1, 0]);
    }

    #[test]
    fn horizontal_move_pushes_collider_down() {
        let mut items = vec![item("a", 0, 0, 1, 1), item("b", 1, 0, 1, 1)];
        drag(&mut items, 0, Some(1), None, true);
        assert_eq!(items[0], item("a", 1, 0, 1, 1));
        assert_eq!(items[1], item("b", 1, 1, 1, 1));
    }

    #[test]
    fn cascade_chains_through_a_column() {
        let mut items = vec![
            item("m", 0, 0, 1, 2),
            item("x", 0, 2, 1, 1),
            item("y", 0, 3, 1, 1),
        ];
        let outcome = drag(&mut items, 0, None, Some(1), false);
        assert_eq!(rows(&items), [1, 3, 4]);
        assert_eq!(ids(&outcome), ["x", "y"]);
    }

    #[test]
    fn nested_levels_never_jump_above() {
        // Once "x" drops to row 2, row 1 above it is free for "y", but only
        // the first level of a user move may jump.
        let mut items = vec![
            item("m", 3, 0, 1, 1),
            item("z", 0, 0, 2, 1),
            item("x", 0, 1, 2, 1),
            item("y", 1, 2, 1, 1),
        ];
        let outcome = drag(&mut items, 0, Some(0), Some(1), true);
        assert_eq!(ids(&outcome), ["x", "y"]);
        assert_eq!(rows(&items), [1, 0, 2, 3]);
    }

    #[test]
    fn upward_deadzone_defers_deep_overlap() {
        let mut items = vec![item("m", 0, 4, 1, 1), item("tall", 0, 0, 1, 4)];
        let outcome = drag(&mut items, 0, None, Some(2), true);
        assert!(outcome.is_isolated());
        assert_eq!(rows(&items), [2, 0]);
    }

    #[test]
    fn upward_deadzone_releases_near_the_top_edge() {
        let mut items = vec![item("m", 0, 4, 1, 1), item("tall", 0, 0, 1, 4)];
        let outcome = drag(&mut items, 0, None, Some(1), true);
        assert_eq!(ids(&outcome), ["tall"]);
        assert_eq!(rows(&items), [1, 1]);
    }

    #[test]
    fn disabled_deadzone_displaces_immediately() {
        let config = PlacementConfig::default().upward_swap_deadzone(DeadzoneRatio::DISABLED);
        let mut items = vec![item("m", 0, 4, 1, 1), item("tall", 0, 0, 1, 4)];
        let outcome = move_element(&mut items, 0, None, Some(2), true, &config);
        assert_eq!(ids(&outcome), ["tall"]);
        assert_eq!(rows(&items), [2, 1]);
    }

    #[test]
    fn visited_items_are_not_displaced_twice() {
        // Both "b" and "c" overlap "m"; pushing "b" down runs into "c"
        // first, so the outer level skips "c".
        let mut items = vec![
            item("m", 0, 0, 2, 2),
            item("b", 0, 1, 1, 1),
            item("c", 0, 2, 2, 1),
        ];
        let outcome = drag(&mut items, 0, None, Some(1), false);
        assert_eq!(ids(&outcome), ["b", "c"]);
        assert_eq!(rows(&items), [1, 2, 3]);
    }

    #[test]
    fn upward_cascade_resolves_nearest_collider_first() {
        let mut items = vec![
            item("m", 0, 3, 3, 3),
            item("a", 0, 0, 1, 1),
            item("b", 1, 1, 1, 1),
            item("c", 2, 2, 1, 1),
        ];
        let outcome = drag(&mut items, 0, None, Some(0), true);
        assert_eq!(ids(&outcome), ["c", "b", "a"]);
        assert_eq!(rows(&items), [0, 1, 2, 3]);
    }
}
