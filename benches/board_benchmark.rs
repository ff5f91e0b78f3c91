//! Board performance benchmarks.
//!
//! Derived state (entry list, page slice, encoded barcodes) is recomputed
//! on every frame, so each stage must stay cheap for large buffers.
//!
//! Run with: cargo bench --bench board_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use barboard::model::{derive_entries, paginate, PageNumber, PAGE_SIZE};
use barboard::state::{AppState, ClickMap, InputBuffer};
use barboard::symbology::{Code128, RenderOptions, Symbology};
use barboard::view::{render_board, BoardLayout, BoardStyles, ColorConfig, RenderContext};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Buffer of `lines` values, one per line, with some blank lines mixed in.
fn make_buffer(lines: usize) -> String {
    (0..lines)
        .map(|i| {
            if i % 17 == 0 {
                String::new()
            } else {
                format!("SKU-{i:06}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn benchmark_derive_entries(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_entries");
    for lines in [100, 10_000, 100_000] {
        let buffer = make_buffer(lines);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &buffer, |b, buffer| {
            b.iter(|| derive_entries(black_box(buffer)))
        });
    }
    group.finish();
}

fn benchmark_paginate(c: &mut Criterion) {
    let entries = derive_entries(&make_buffer(100_000));
    let last = PageNumber::new(entries.len().div_ceil(PAGE_SIZE)).unwrap_or(PageNumber::FIRST);

    c.bench_function("paginate_last_page_100k", |b| {
        b.iter(|| paginate(black_box(&entries), PAGE_SIZE, black_box(last)))
    });
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("code128_encode");
    for value in ["ABC", "0123456789012345", "Mixed-Value 42 with text"] {
        group.bench_with_input(BenchmarkId::from_parameter(value), value, |b, value| {
            b.iter(|| Code128.encode(black_box(value)))
        });
    }
    group.finish();

    let barcode = Code128.encode("0123456789012345").unwrap();
    c.bench_function("bar_row_modal_size", |b| {
        b.iter(|| barcode.bar_row(black_box(RenderOptions::new(8, 2))))
    });
}

fn benchmark_render_board(c: &mut Criterion) {
    let styles = BoardStyles::with_color_config(ColorConfig::fixed(true));
    let ctx = RenderContext {
        symbology: &Code128,
        styles: &styles,
        grid_options: RenderOptions::new(3, 1),
        modal_options: RenderOptions::new(8, 2),
        show_text: true,
    };

    let mut group = c.benchmark_group("render_board");
    for lines in [30, 10_000] {
        let state = AppState::with_buffer(InputBuffer::from_text(make_buffer(lines)));
        let area = Rect::new(0, 0, 160, 50);
        let layout = BoardLayout::compute(area, true);
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();

        group.bench_function(BenchmarkId::from_parameter(lines), |b| {
            b.iter(|| {
                let mut click_map = ClickMap::new();
                terminal
                    .draw(|frame| click_map = render_board(frame, &state, &layout, &ctx))
                    .unwrap();
                black_box(click_map.len())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_derive_entries,
    benchmark_paginate,
    benchmark_encode,
    benchmark_render_board
);
criterion_main!(benches);
