//! Aggregation pass benchmarks
//!
//! Establishes the single-fold baseline across log sizes, with and without
//! attached player records.
//!
//! Run with: cargo bench --bench aggregations

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meeple_stats::{aggregate, AggregateContext, PlayLog, PlayRecord, PlayerRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_SIZE: usize = 100; // casual logger
const MEDIUM_SIZE: usize = 1_000; // heavy logger
const LARGE_SIZE: usize = 10_000; // whole-guild log

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()
}

fn reference_ctx() -> AggregateContext {
    AggregateContext::new("alice42", NaiveDate::from_ymd_opt(2022, 1, 1).unwrap())
        .with_nominal_playing_time(60)
        .with_rating(7.3)
}

/// Build a synthetic ordered play log
fn synthetic_plays(len: usize, seed: u64) -> Vec<PlayRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut offset = 0_u64;
    (0..len)
        .map(|position| {
            offset += rng.gen_range(0..3);
            PlayRecord::builder(position as u64 + 1, base_date() + Days::new(offset))
                .quantity(rng.gen_range(1..=4))
                .duration(if rng.gen_bool(0.5) { rng.gen_range(20..180) } else { 0 })
                .player_count(rng.gen_range(0..=6))
                .incomplete(rng.gen_bool(0.05))
                .build()
        })
        .collect()
}

/// Attach 2-5 scored players per play
fn with_players(plays: Vec<PlayRecord>, seed: u64) -> PlayLog {
    let mut rng = StdRng::seed_from_u64(seed);
    let ids: Vec<u64> = plays.iter().map(PlayRecord::id).collect();
    let mut log = PlayLog::from_plays(plays);
    let players: Vec<PlayerRecord> = ids
        .iter()
        .flat_map(|&play_id| {
            let seats = rng.gen_range(2..=5);
            (0..seats)
                .map(|seat| {
                    PlayerRecord::builder(play_id, format!("Player {seat}"))
                        .username(if seat == 0 { "alice42" } else { "" })
                        .win(seat == 0)
                        .score(rng.gen_range(0..120).to_string())
                        .build()
                })
                .collect::<Vec<_>>()
        })
        .collect();
    log.attach_players(players).expect("ids are known");
    log
}

/// Benchmark the bare fold over plays without players
fn bench_plays_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_plays_only");

    for size in [SMALL_SIZE, MEDIUM_SIZE, LARGE_SIZE] {
        let plays = synthetic_plays(size, 42);
        let ctx = reference_ctx();
        group.bench_with_input(BenchmarkId::new("fold", size), &plays, |b, plays| {
            b.iter(|| aggregate(black_box(plays), &ctx));
        });
    }

    group.finish();
}

/// Benchmark the fold including score/win accounting over attached players
fn bench_with_players(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_with_players");

    for size in [SMALL_SIZE, MEDIUM_SIZE] {
        let log = with_players(synthetic_plays(size, 42), 43);
        let ctx = reference_ctx();
        group.bench_with_input(BenchmarkId::new("fold", size), &log, |b, log| {
            b.iter(|| black_box(log).aggregate(&ctx));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_plays_only, bench_with_players);
criterion_main!(benches);
