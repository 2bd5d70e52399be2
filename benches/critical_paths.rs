//! Criterion benchmarks for skinatlas critical paths
//!
//! - Load: PNG decode, validation and legacy normalization
//! - Extract: six-face extraction of a body part
//! - Preview: front preview composition at several output sizes
//! - Cape: cape/elytra split

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::{Rgba, RgbaImage};
use skinatlas::output::encode_png;
use skinatlas::{BodyPart, Cape, Skin};

// =============================================================================
// Test Data Generators
// =============================================================================

fn make_texture(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, (x ^ y) as u8, 255]))
}

fn make_png(width: u32, height: u32) -> Vec<u8> {
    encode_png(&make_texture(width, height)).expect("encode benchmark texture")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    for width in [64u32, 256, 1024] {
        let square = make_png(width, width);
        let legacy = make_png(width, width / 2);
        group.throughput(Throughput::Bytes(square.len() as u64));
        group.bench_with_input(BenchmarkId::new("canonical", width), &square, |b, bytes| {
            b.iter(|| Skin::load_bytes(black_box(bytes)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("legacy", width), &legacy, |b, bytes| {
            b.iter(|| Skin::load_bytes(black_box(bytes)).unwrap())
        });
    }
    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    for width in [64u32, 512] {
        let skin = Skin::from_canvas(make_texture(width, width)).unwrap();
        for part in [BodyPart::Head, BodyPart::Body, BodyPart::LeftArm] {
            group.bench_with_input(BenchmarkId::new(part.key(), width), &skin, |b, skin| {
                b.iter(|| skin.part(black_box(part)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview");
    let skin = Skin::from_canvas(make_texture(64, 64)).unwrap();
    for (w, h) in [(16u32, 32u32), (64, 128), (256, 512)] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{}x{}", w, h)), &(w, h), |b, &(w, h)| {
            b.iter(|| skin.front_preview(black_box(w), black_box(h)).unwrap())
        });
    }
    group.finish();
}

fn bench_cape(c: &mut Criterion) {
    let mut group = c.benchmark_group("cape");
    for (w, h) in [(22u32, 17u32), (64, 32), (512, 512)] {
        let texture = make_texture(w, h);
        group.bench_with_input(BenchmarkId::from_parameter(format!("{}x{}", w, h)), &texture, |b, texture| {
            b.iter(|| Cape::from_canvas(black_box(texture.clone())).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load, bench_extract, bench_preview, bench_cape);
criterion_main!(benches);
