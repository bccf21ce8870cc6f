#![no_main]

use arbitrary::Arbitrary;
use gridflow_layout::{Layout, LayoutItem, PlacementConfig, compact, move_element};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Seed {
    x: u8,
    y: u32,
    w: u8,
    h: u8,
}

#[derive(Debug, Arbitrary)]
enum Op {
    Move {
        target: u8,
        x: Option<u8>,
        y: Option<u32>,
        user: bool,
    },
    Drag {
        target: u8,
        x: Option<u8>,
        y: Option<u32>,
    },
    Resize {
        target: u8,
        w: u8,
        h: u8,
    },
    Compact,
}

#[derive(Debug, Arbitrary)]
struct Input {
    items: Vec<Seed>,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    // Keep layouts small enough that quadratic cascades stay fast.
    let items: Vec<LayoutItem> = input
        .items
        .iter()
        .take(48)
        .enumerate()
        .map(|(i, s)| {
            LayoutItem::new(
                format!("i{i}"),
                u32::from(s.x % 24),
                // Rows span most of the u32 range; compaction must not scale with them.
                s.y % (u32::MAX / 2),
                u32::from(s.w % 6) + 1,
                u32::from(s.h % 6) + 1,
            )
        })
        .collect();
    if items.is_empty() {
        return;
    }
    let n = items.len();
    let ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
    let mut layout = Layout::new(items);

    for op in input.ops.iter().take(32) {
        match *op {
            Op::Move { target, x, y, user } => {
                let index = usize::from(target) % n;
                let mut raw = layout.clone().into_items();
                let outcome = move_element(
                    &mut raw,
                    index,
                    x.map(u32::from),
                    y.map(|y| y % (u32::MAX / 2)),
                    user,
                    &PlacementConfig::default(),
                );
                assert!(outcome.displaced.len() < n, "item displaced twice");
                assert!(!outcome.displaced.contains(&ids[index]), "mover displaced");
                layout = Layout::new(raw);
            }
            Op::Drag { target, x, y } => {
                let id = &ids[usize::from(target) % n];
                layout
                    .drag(id, x.map(u32::from), y.map(|y| y % (u32::MAX / 2)))
                    .expect("id comes from the layout");
                assert!(layout.collisions().is_empty(), "drag left overlaps");
            }
            Op::Resize { target, w, h } => {
                let id = &ids[usize::from(target) % n];
                let w = u32::from(w % 6) + 1;
                let h = u32::from(h % 6) + 1;
                layout.resize(id, w, h).expect("non-empty size");
                assert!(layout.collisions().is_empty(), "resize left overlaps");
            }
            Op::Compact => {
                layout.compact();
                assert!(layout.collisions().is_empty(), "compact left overlaps");
                assert_eq!(compact(layout.items()), layout.items(), "compact not idempotent");
            }
        }

        // Shape and identity never change.
        assert_eq!(layout.len(), n);
        for (item, id) in layout.items().iter().zip(&ids) {
            assert_eq!(&item.id, id);
            assert!(item.w > 0 && item.h > 0);
        }
    }
});
