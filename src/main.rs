//! Playdeck - Entry Point
//!
//! Demo binary: seeds a small in-memory platform, simulates a few play
//! sessions, and prints the ranked feed and the player's level summary.

use std::sync::Arc;

use anyhow::Result;
use rand::Rng;

use playdeck::clock::{SystemClock, MS_PER_DAY};
use playdeck::feed::{Campaign, GameConfig};
use playdeck::progression::CurveCache;
use playdeck::ratings::RatingAggregate;
use playdeck::service::{ExperienceService, FeedService, StaticCatalog, StaticRatings};
use playdeck::store::{MemoryStore, UserProfile, UserStore};
use playdeck::Clock;

/// Play sessions simulated for the demo user
const DEMO_SESSIONS: usize = 5;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Playdeck demo v{}", env!("CARGO_PKG_VERSION"));

    let clock = Arc::new(SystemClock);
    let now = clock.now_ms();

    // Seed a small catalog with one game per interesting signal
    let catalog = seed_catalog(now);
    let ratings = seed_ratings(now);

    let store = Arc::new(MemoryStore::new());
    store.put(UserProfile::new("demo", "Demo Player", now));

    let experience = ExperienceService::new(store, Arc::new(CurveCache::new()), clock.clone());
    let feeds = FeedService::new(
        Box::new(StaticCatalog(catalog)),
        Box::new(StaticRatings(ratings)),
        clock,
    );

    // Simulate a handful of sessions with random scores
    let mut rng = rand::thread_rng();
    for session in 1..=DEMO_SESSIONS {
        let score = rng.gen_range(50.0..4000.0);
        let outcome = experience.award_score("demo", score, 1.0)?;
        println!(
            "session {}: score {:.0} -> +{} XP (level {}, {:.0}% through)",
            session,
            score,
            outcome.awarded,
            outcome.summary.level,
            outcome.summary.percent * 100.0
        );
    }

    if let Some(summary) = experience.get_summary("demo") {
        println!(
            "\ndemo player: level {} | {}/{} XP | {} total lifetime XP",
            summary.level, summary.progress, summary.required, summary.total
        );
    }

    // Rank the feed as the demo player, who just played "match3"
    let recent = vec!["match3".to_string()];
    let page = feeds.compute_feed(&recent, false, 10);
    println!("\nfeed ({} games ranked):", page.total);
    for (rank, entry) in page.entries.iter().enumerate() {
        println!(
            "  {:>2}. {:<10} score {:>7.1}  [{:?}]",
            rank + 1,
            entry.game_id,
            entry.score,
            entry.reason
        );
    }

    log::info!("Playdeck demo finished");
    Ok(())
}

fn seed_catalog(now: i64) -> Vec<GameConfig> {
    let mut slots = GameConfig::new("slots", "Lucky Slots", now - 200 * MS_PER_DAY);
    slots.metadata.featured = true;

    let mut bingo = GameConfig::new("bingo", "Bingo Blast", now - 90 * MS_PER_DAY);
    bingo.metadata.campaigns = vec![Campaign {
        name: "summer-promo".into(),
        priority: 3,
        start_ms: Some(now - 2 * MS_PER_DAY),
        end_ms: Some(now + 5 * MS_PER_DAY),
    }];

    let mut match3 = GameConfig::new("match3", "Gem Swap", now - 60 * MS_PER_DAY);
    match3.updated_at = now - MS_PER_DAY;

    let solitaire = GameConfig::new("solitaire", "Solitaire", now - 3 * MS_PER_DAY);
    let trivia = GameConfig::new("trivia", "Trivia Night", now - 365 * MS_PER_DAY);

    vec![slots, bingo, match3, solitaire, trivia]
}

fn seed_ratings(now: i64) -> Vec<RatingAggregate> {
    vec![
        RatingAggregate {
            game_id: "trivia".into(),
            rating_sum: 410,
            rating_count: 95,
            updated_at: now - 10 * MS_PER_DAY,
        },
        RatingAggregate {
            game_id: "match3".into(),
            rating_sum: 56,
            rating_count: 14,
            updated_at: now - MS_PER_DAY / 2,
        },
    ]
}
