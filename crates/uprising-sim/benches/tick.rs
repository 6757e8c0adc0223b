//! Benchmarks for session tick throughput.
//!
//! Run with: `cargo bench -p uprising-sim`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uprising_core::commands::PlayerCommand;
use uprising_core::config::SimConfig;
use uprising_sim::Session;

fn started_session(seed: u64) -> Session {
    let mut session = Session::new(SimConfig::with_seed(seed));
    session.queue_command(PlayerCommand::Start);
    session.step();
    session
}

fn tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    group.bench_function("single_tick_full_crowd", |b| {
        let mut session = started_session(42);
        b.iter(|| black_box(session.step()))
    });

    group.bench_function("ten_seconds", |b| {
        b.iter(|| {
            let mut session = started_session(black_box(7));
            for _ in 0..600 {
                if session.phase().is_over() {
                    break;
                }
                session.step();
            }
            black_box(session.stats().global_morale)
        })
    });

    group.bench_function("rioting_crowd", |b| {
        let mut session = started_session(42);
        session.queue_command(PlayerCommand::SelectAll);
        session.queue_command(PlayerCommand::Command {
            target: glam::Vec2::new(1300.0, 520.0),
        });
        b.iter(|| black_box(session.step()))
    });

    group.finish();
}

criterion_group!(benches, tick_benchmark);
criterion_main!(benches);
