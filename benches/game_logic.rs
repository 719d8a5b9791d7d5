use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_whack::core::{GameSnapshot, GameState};
use tui_whack::types::SPAWN_INTERVAL_MS;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
        })
    });
}

fn bench_spawn_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("spawn_tick", |b| {
        b.iter(|| {
            state.tick(black_box(SPAWN_INTERVAL_MS));
        })
    });
}

fn bench_whack(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    state.tick(SPAWN_INTERVAL_MS);

    c.bench_function("whack", |b| {
        b.iter(|| {
            // Mostly misses; the guard path is the hot one under real input.
            state.whack(black_box(4));
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    state.tick(SPAWN_INTERVAL_MS * 3);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(benches, bench_tick, bench_spawn_tick, bench_whack, bench_snapshot_into);
criterion_main!(benches);
