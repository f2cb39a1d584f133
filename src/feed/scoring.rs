//! Feed scoring
//!
//! Scores each game by a fixed, ordered list of additive signals.
//! Every matching signal contributes to the score; only the first
//! matching labeled signal latches the reason, defaulting to Popular.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clock::MS_PER_DAY;
use crate::ratings::RatingAggregate;
use super::config::GameConfig;
use super::variety::daily_variety_boost;

/// Boost for curated featured games
pub const FEATURED_BOOST: f64 = 1200.0;
/// Base boost for an active campaign, before the priority bump
pub const CAMPAIGN_BOOST: f64 = 1000.0;
/// Boost for beta-only games shown to beta testers
pub const BETA_BOOST: f64 = 800.0;

/// The dominant label explaining a game's placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedReason {
    Featured,
    Campaign,
    UserRecent,
    Beta,
    Updated,
    New,
    Rated,
    Popular,
}

/// A game's computed relevance, recomputed per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredGame {
    pub game_id: String,
    pub score: f64,
    pub reason: FeedReason,
}

/// One evaluated signal: its score contribution and, for signals that
/// can explain a placement, a label
struct Signal {
    delta: f64,
    label: Option<FeedReason>,
}

/// Boost for a game the user played recently, by recency index.
/// Index 0 gets a modest nudge; indexes 1+ decay from 900 to a floor.
fn recent_play_boost(index: usize) -> f64 {
    if index == 0 {
        200.0
    } else {
        (900.0 - index as f64 * 80.0).max(50.0)
    }
}

/// Fractional days elapsed since a timestamp, never negative
fn days_since(now_ms: i64, ts_ms: i64) -> f64 {
    ((now_ms - ts_ms) as f64 / MS_PER_DAY as f64).max(0.0)
}

/// Evaluate the ordered signal list for one game
fn signals_for(
    game: &GameConfig,
    rating: Option<&RatingAggregate>,
    recent_index: Option<usize>,
    is_beta_tester: bool,
    now_ms: i64,
) -> Vec<Signal> {
    let mut signals = Vec::new();

    // 1. Curated featured flag
    if game.metadata.featured {
        signals.push(Signal {
            delta: FEATURED_BOOST,
            label: Some(FeedReason::Featured),
        });
    }

    // 2. Active campaign, highest priority wins
    if let Some(campaign) = game.active_campaign(now_ms) {
        signals.push(Signal {
            delta: CAMPAIGN_BOOST + campaign.priority as f64 * 10.0,
            label: Some(FeedReason::Campaign),
        });
    }

    // 3. Recent play
    if let Some(index) = recent_index {
        signals.push(Signal {
            delta: recent_play_boost(index),
            label: Some(FeedReason::UserRecent),
        });
    }

    // 4. Beta catalog for beta testers
    if is_beta_tester && game.beta_only {
        signals.push(Signal {
            delta: BETA_BOOST,
            label: Some(FeedReason::Beta),
        });
    }

    // 5. Recently updated (a real update, not just creation)
    let updated_days = days_since(now_ms, game.updated_at);
    if updated_days < 7.0 && game.updated_at > game.created_at {
        signals.push(Signal {
            delta: (500.0 - updated_days * 70.0).max(0.0),
            label: Some(FeedReason::Updated),
        });
    }

    // 6. Recently created
    let created_days = days_since(now_ms, game.created_at);
    if created_days < 14.0 {
        signals.push(Signal {
            delta: (400.0 - created_days * 28.0).max(0.0),
            label: Some(FeedReason::New),
        });
    }

    // 7. Recently rated
    if let Some(agg) = rating {
        if agg.rating_count > 0 {
            let rated_days = days_since(now_ms, agg.updated_at);
            if rated_days < 3.0 {
                signals.push(Signal {
                    delta: (300.0 - rated_days * 100.0).max(0.0),
                    label: Some(FeedReason::Rated),
                });
            }
        }
    }

    // 8. Popularity floor, never latches a label
    if let Some(agg) = rating {
        signals.push(Signal {
            delta: agg.avg_rating() * 20.0 + agg.rating_count.min(50) as f64 * 2.0,
            label: None,
        });
    }

    // 9. Daily variety, never latches a label
    signals.push(Signal {
        delta: daily_variety_boost(&game.game_id, now_ms),
        label: None,
    });

    signals
}

/// Score one game: fold the signal list, accumulating every delta and
/// latching the first label seen
pub fn score_game(
    game: &GameConfig,
    rating: Option<&RatingAggregate>,
    recent_index: Option<usize>,
    is_beta_tester: bool,
    now_ms: i64,
) -> ScoredGame {
    let (score, reason) = signals_for(game, rating, recent_index, is_beta_tester, now_ms)
        .into_iter()
        .fold((0.0, None), |(score, reason), signal| {
            (score + signal.delta, reason.or(signal.label))
        });
    ScoredGame {
        game_id: game.game_id.clone(),
        score,
        reason: reason.unwrap_or(FeedReason::Popular),
    }
}

/// Score every game in the catalog
pub fn score_games(
    games: &[GameConfig],
    ratings: &HashMap<String, RatingAggregate>,
    recent_game_ids: &[String],
    is_beta_tester: bool,
    now_ms: i64,
) -> Vec<ScoredGame> {
    games
        .iter()
        .map(|game| {
            let recent_index = recent_game_ids.iter().position(|id| id == &game.game_id);
            score_game(
                game,
                ratings.get(&game.game_id),
                recent_index,
                is_beta_tester,
                now_ms,
            )
        })
        .collect()
}
