//! Benchmarks for hot-path row and tag operations.
//!
//! Models the buffer writer driving `write_str` for every line of output and
//! the public API boundary encoding/decoding a full row of width tags.
//!
//! - **80**: Classic terminal width.
//! - **120**: Modern half-screen split.
//! - **240**: Full-screen 4K.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use dbcs_core::{CellWidthTag, Column, OutputCell, PublicAttrs, Row};

/// Row widths that represent real usage.
const WIDTHS: [usize; 3] = [80, 120, 240];

// ---------------------------------------------------------------------------
// Helpers: realistic content generation
// ---------------------------------------------------------------------------

/// Mostly ASCII with a CJK glyph every 20th character.
fn ascii_heavy_line(cols: usize) -> String {
    (0..cols)
        .map(|i| {
            if i % 20 == 19 {
                '好'
            } else {
                (b'a' + (i % 26) as u8) as char
            }
        })
        .collect()
}

/// Every glyph double-width: worst case for pair bookkeeping.
fn cjk_heavy_line(cols: usize) -> String {
    "漢字混在表示速度測定用".chars().cycle().take(cols / 2).collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_write_ascii(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_str/ascii_line");
    for &cols in &WIDTHS {
        let text = ascii_heavy_line(cols);
        group.bench_with_input(BenchmarkId::from_parameter(cols), &text, |b, text| {
            let mut row = Row::new(cols);
            b.iter(|| row.write_str(Column(0), black_box(text), Some(true)));
        });
    }
    group.finish();
}

/// Overwrites an existing CJK line shifted by one column, so every write
/// splits a pair.
fn bench_write_cjk_misaligned(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_str/cjk_misaligned");
    for &cols in &WIDTHS {
        let text = cjk_heavy_line(cols);
        group.bench_with_input(BenchmarkId::from_parameter(cols), &text, |b, text| {
            let mut row = Row::new(cols);
            b.iter(|| {
                black_box(row.write_str(Column(0), black_box(text), None)).ok();
                row.write_str(Column(1), black_box(text), None)
            });
        });
    }
    group.finish();
}

/// Encode a full row to public words and decode it back.
fn bench_public_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("public_flags/row_round_trip");
    for &cols in &WIDTHS {
        let color = PublicAttrs::FOREGROUND_RED | PublicAttrs::BACKGROUND_BLUE;
        let text = ascii_heavy_line(cols);
        let mut cells = OutputCell::from_text(&text)
            .map(|cell| cell.with_attrs(color))
            .peekable();
        let mut row = Row::new(cols);
        black_box(row.write_cells(Column(0), &mut cells, None, None)).ok();
        group.bench_with_input(BenchmarkId::from_parameter(cols), &row, |b, row| {
            b.iter(|| {
                (0..row.cols())
                    .map(|col| row.public_attrs_at(Column(col)))
                    .filter_map(|attrs| CellWidthTag::from_public_flags(black_box(attrs)).ok())
                    .filter(|tag| tag.is_dbcs())
                    .count()
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_write_ascii,
    bench_write_cjk_misaligned,
    bench_public_round_trip,
);
criterion_main!(benches);
