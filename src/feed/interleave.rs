//! Feed interleaving
//!
//! Reorders the scored list so the head of the feed shows one game per
//! reason before any reason repeats, then round-robins the remainder.

use super::scoring::{FeedReason, ScoredGame};

/// Bucket emission order. Deliberately not the same order the scoring
/// engine latches labels in: recent plays sit behind fresh content here.
pub const BUCKET_ORDER: [FeedReason; 8] = [
    FeedReason::Featured,
    FeedReason::Campaign,
    FeedReason::Beta,
    FeedReason::Updated,
    FeedReason::New,
    FeedReason::UserRecent,
    FeedReason::Rated,
    FeedReason::Popular,
];

/// Reorder scored games for head-of-feed diversity.
///
/// Sorts descending by score, buckets by reason, then emits the best
/// game of each non-empty bucket in the fixed bucket order before
/// round-robining across buckets until every game is placed. A single
/// dominant bucket therefore cannot monopolize the first screen.
pub fn interleave(mut scored: Vec<ScoredGame>) -> Vec<ScoredGame> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    // Per-reason queues, each still descending by score
    let mut buckets: Vec<Vec<ScoredGame>> = vec![Vec::new(); BUCKET_ORDER.len()];
    for game in scored {
        let slot = BUCKET_ORDER
            .iter()
            .position(|&r| r == game.reason)
            .unwrap_or(BUCKET_ORDER.len() - 1);
        buckets[slot].push(game);
    }

    let total: usize = buckets.iter().map(|b| b.len()).sum();
    let mut ordered = Vec::with_capacity(total);
    let mut cursors = vec![0usize; buckets.len()];

    // Keep cycling the buckets in fixed order; the first cycle is the
    // diversity pass, every later cycle is the round-robin drain
    while ordered.len() < total {
        for (bucket, cursor) in buckets.iter().zip(cursors.iter_mut()) {
            if *cursor < bucket.len() {
                ordered.push(bucket[*cursor].clone());
                *cursor += 1;
            }
        }
    }

    ordered
}
