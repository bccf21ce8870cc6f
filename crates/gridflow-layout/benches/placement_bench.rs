//! Benchmarks for compaction and cascading moves.
//!
//! Run with: cargo bench -p gridflow-layout

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gridflow_layout::{Layout, LayoutItem, PlacementConfig, compact, move_element};
use std::hint::black_box;

/// A 12-column dashboard of `n` widgets with mixed sizes, scattered so that
/// compaction has gaps to close.
fn make_dashboard(n: usize) -> Vec<LayoutItem> {
    (0..n)
        .map(|i| {
            let w = 1 + (i % 4) as u32;
            let h = 1 + (i % 3) as u32;
            let x = ((i * 5) % 12) as u32;
            let y = (i * 2) as u32;
            LayoutItem::new(format!("w{i}"), x.min(12 - w), y, w, h)
        })
        .collect()
}

/// `n` full-width rows stacked in one column: worst case for cascades.
fn make_column(n: usize) -> Vec<LayoutItem> {
    (0..n)
        .map(|i| LayoutItem::new(format!("r{i}"), 0, i as u32, 4, 1))
        .collect()
}

fn bench_compact(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/compact");

    for n in [10, 50, 100, 250] {
        let items = make_dashboard(n);
        group.bench_with_input(BenchmarkId::new("dashboard", n), &items, |b, items| {
            b.iter(|| black_box(compact(items)))
        });
    }

    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/cascade");
    let config = PlacementConfig::default();

    for n in [10, 50, 100] {
        let items = make_column(n);
        group.bench_with_input(BenchmarkId::new("push_column", n), &items, |b, items| {
            b.iter_batched(
                || items.clone(),
                |mut items| {
                    let outcome = move_element(&mut items, 0, None, Some(1), true, &config);
                    black_box(outcome)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/drag");

    for n in [10, 50, 100] {
        let layout = Layout::new(compact(&make_dashboard(n)));
        let id = layout.items()[n / 2].id.clone();
        group.bench_with_input(BenchmarkId::new("to_top", n), &layout, |b, layout| {
            b.iter_batched(
                || layout.clone(),
                |mut layout| {
                    layout
                        .drag(&id, Some(0), Some(0))
                        .expect("id comes from the layout");
                    black_box(layout)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compact, bench_cascade, bench_drag);

criterion_main!(benches);
