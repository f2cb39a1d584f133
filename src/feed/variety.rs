//! Daily variety boost
//!
//! A deterministic pseudo-random nudge in [0, 50) that reshuffles the
//! mid-feed a little each UTC day without any stored state.

use crate::clock::MS_PER_DAY;

/// Sum of character codes, the cheap stable hash the boost keys on
pub fn char_code_sum(game_id: &str) -> i64 {
    game_id.chars().map(|c| c as i64).sum()
}

/// Variety boost for a game at an instant.
///
/// Seeds on the UTC day number plus the game-id hash, reduced mod 100
/// and scaled to [0, 50). Every request within one UTC day sees the
/// same value; it changes the next day.
pub fn daily_variety_boost(game_id: &str, now_ms: i64) -> f64 {
    let day = now_ms.div_euclid(MS_PER_DAY);
    let seed = (day + char_code_sum(game_id)).rem_euclid(100);
    seed as f64 * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_code_sum() {
        assert_eq!(char_code_sum("ab"), 97 + 98);
        assert_eq!(char_code_sum(""), 0);
    }

    #[test]
    fn test_stable_within_a_day() {
        let morning = 3 * MS_PER_DAY + 1_000;
        let evening = 4 * MS_PER_DAY - 1_000;
        assert_eq!(
            daily_variety_boost("slots", morning),
            daily_variety_boost("slots", evening)
        );
    }

    #[test]
    fn test_changes_across_days_in_range() {
        let mut seen_change = false;
        let base = daily_variety_boost("slots", 0);
        for day in 0..10 {
            let boost = daily_variety_boost("slots", day * MS_PER_DAY);
            assert!((0.0..50.0).contains(&boost));
            if boost != base {
                seen_change = true;
            }
        }
        assert!(seen_change);
    }

    #[test]
    fn test_differs_per_game() {
        // Distinct hashes land on distinct seeds for these ids
        let now = 5 * MS_PER_DAY;
        assert_ne!(
            daily_variety_boost("slots", now),
            daily_variety_boost("bingo", now)
        );
    }
}
