//! Rating aggregation
//!
//! Running (sum, count) per game, maintained by delta on each upsert.

use serde::{Deserialize, Serialize};

/// Running rating totals for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingAggregate {
    pub game_id: String,
    pub rating_sum: u64,
    pub rating_count: u64,
    /// When the aggregate last changed (epoch ms)
    pub updated_at: i64,
}

impl RatingAggregate {
    /// Empty aggregate for a game nobody has rated yet
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            rating_sum: 0,
            rating_count: 0,
            updated_at: 0,
        }
    }

    /// Mean rating; 0 when nobody has rated
    pub fn avg_rating(&self) -> f64 {
        if self.rating_count == 0 {
            0.0
        } else {
            self.rating_sum as f64 / self.rating_count as f64
        }
    }

    /// Fold one user's rating upsert into the totals.
    ///
    /// A first-time rating adds its full value and bumps the count; a
    /// re-rating shifts the sum by the delta and leaves the count alone.
    pub fn record_rating(&mut self, previous: Option<u32>, rating: u32, now_ms: i64) {
        match previous {
            None => {
                self.rating_sum += rating as u64;
                self.rating_count += 1;
            }
            Some(prev) => {
                self.rating_sum = self.rating_sum.saturating_sub(prev as u64) + rating as u64;
            }
        }
        self.updated_at = now_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_average_is_zero() {
        let agg = RatingAggregate::new("slots");
        assert_eq!(agg.avg_rating(), 0.0);
    }

    #[test]
    fn test_first_time_rating_scenario() {
        let mut agg = RatingAggregate {
            game_id: "slots".into(),
            rating_sum: 12,
            rating_count: 4,
            updated_at: 0,
        };
        assert!((agg.avg_rating() - 3.0).abs() < f64::EPSILON);

        agg.record_rating(None, 5, 42);
        assert_eq!(agg.rating_sum, 17);
        assert_eq!(agg.rating_count, 5);
        assert!((agg.avg_rating() - 3.4).abs() < f64::EPSILON);
        assert_eq!(agg.updated_at, 42);
    }

    #[test]
    fn test_rerating_shifts_sum_only() {
        let mut agg = RatingAggregate {
            game_id: "slots".into(),
            rating_sum: 17,
            rating_count: 5,
            updated_at: 0,
        };
        // User changes their 5 to a 2
        agg.record_rating(Some(5), 2, 50);
        assert_eq!(agg.rating_sum, 14);
        assert_eq!(agg.rating_count, 5);
    }
}
