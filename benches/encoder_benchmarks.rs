//! Benchmarks for Identity-H encoding and reverse lookups.
//!
//! Run with: cargo bench --bench encoder_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pdf_textenc::fonts::{GlyphIndex, TextEncoder, TrueTypeFontEncoder};

/// Table shaped like a CJK subset font: many runes, sparse glyph indices.
fn cjk_table(size: usize) -> Vec<(char, GlyphIndex)> {
    (0..size)
        .filter_map(|i| char::from_u32(0x4E00 + (i as u32) * 3).map(|c| (c, (i + 1) as GlyphIndex)))
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let latin: Vec<(char, GlyphIndex)> = (' '..='~').zip(1..).collect();
    let enc = TrueTypeFontEncoder::new(latin);
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(100);

    group.bench_function("latin_4500_chars", |b| {
        b.iter(|| enc.encode(black_box(&text)))
    });
    group.finish();
}

fn bench_charcode_to_rune(c: &mut Criterion) {
    let mut group = c.benchmark_group("charcode_to_rune");
    for size in [100usize, 1_000, 10_000] {
        let enc = TrueTypeFontEncoder::new(cjk_table(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                for code in (1..=size as u32).step_by(7) {
                    black_box(enc.charcode_to_rune(black_box(code)));
                }
            })
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let enc = TrueTypeFontEncoder::new(cjk_table(5_000));
    let text: String = cjk_table(5_000).into_iter().map(|(c, _)| c).collect();
    let bytes = enc.encode(&text);

    c.bench_function("decode_5000_cjk", |b| b.iter(|| enc.decode(black_box(&bytes))));
}

criterion_group!(benches, bench_encode, bench_charcode_to_rune, bench_decode);
criterion_main!(benches);
