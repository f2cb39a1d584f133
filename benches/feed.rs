//! Feed pipeline benchmark
//!
//! Scores and interleaves a synthetic catalog of varying size.

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use playdeck::clock::MS_PER_DAY;
use playdeck::feed::{interleave, score_games, GameConfig};
use playdeck::ratings::RatingAggregate;

const NOW: i64 = 20_000 * MS_PER_DAY;

fn synthetic_catalog(count: usize) -> (Vec<GameConfig>, HashMap<String, RatingAggregate>) {
    let mut games = Vec::with_capacity(count);
    let mut ratings = HashMap::new();
    for i in 0..count {
        let id = format!("game-{}", i);
        let mut game = GameConfig::new(&id, &id, NOW - (i as i64 % 400) * MS_PER_DAY);
        game.metadata.featured = i % 17 == 0;
        game.beta_only = i % 11 == 0;
        if i % 3 == 0 {
            ratings.insert(
                id.clone(),
                RatingAggregate {
                    game_id: id,
                    rating_sum: (i as u64 % 5 + 1) * 20,
                    rating_count: 20,
                    updated_at: NOW - (i as i64 % 10) * MS_PER_DAY,
                },
            );
        }
        games.push(game);
    }
    (games, ratings)
}

fn bench_feed_pipeline(c: &mut Criterion) {
    let recent: Vec<String> = (0..8).map(|i| format!("game-{}", i * 7)).collect();
    let mut group = c.benchmark_group("feed_pipeline");

    for &count in &[50usize, 500, 5_000] {
        let (games, ratings) = synthetic_catalog(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let scored = score_games(
                    black_box(&games),
                    black_box(&ratings),
                    black_box(&recent),
                    true,
                    NOW,
                );
                interleave(scored)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_feed_pipeline);
criterion_main!(benches);
