//! Tick benchmark: Measure generation advance across board sizes.
//!
//! Target: a 256x256 board well under one 30 FPS frame budget (33ms)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lifewheel::Universe;

fn tick_by_size(c: &mut Criterion) {
    for size in [32u32, 64, 128, 256] {
        let mut universe = Universe::new(size, size);
        c.bench_function(&format!("tick_{size}x{size}"), |b| {
            b.iter(|| {
                universe.tick();
                black_box(&universe);
            });
        });
    }
}

fn universe_constructor(c: &mut Criterion) {
    c.bench_function("universe_new_64x64", |b| {
        b.iter(|| Universe::new(black_box(64), black_box(64)))
    });

    c.bench_function("universe_blank_256x256", |b| {
        b.iter(|| Universe::blank(black_box(256), black_box(256)))
    });
}

fn clear_cells(c: &mut Criterion) {
    let mut universe = Universe::new(256, 256);
    c.bench_function("clear_cells_256x256", |b| {
        b.iter(|| {
            universe.clear_cells();
            black_box(&universe);
        });
    });
}

criterion_group!(benches, tick_by_size, universe_constructor, clear_cells);
criterion_main!(benches);
