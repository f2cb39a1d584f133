//! XP award calculation
//!
//! Converts a raw game score into an XP award.

/// Smallest XP award once a session earns anything at all
pub const MIN_XP: i64 = 1;
/// Per-session XP ceiling
pub const MAX_XP: i64 = 5000;

/// Convert a session score into an XP award.
///
/// A non-finite or non-positive score earns nothing. A non-finite or
/// non-positive multiplier is treated as 1.0. Otherwise the floored
/// product is clamped to `[MIN_XP, MAX_XP]` — note the clamp floor kicks
/// in even when the product floors to 0, so a score of 0.5 earns 1 XP
/// while a score of 0 earns none. Downstream accounting relies on that
/// exact split.
pub fn calculate_xp(score: f64, multiplier: f64) -> u32 {
    if !score.is_finite() || score <= 0.0 {
        return 0;
    }
    let multiplier = if !multiplier.is_finite() || multiplier <= 0.0 {
        1.0
    } else {
        multiplier
    };
    let raw = (score * multiplier).floor() as i64;
    raw.clamp(MIN_XP, MAX_XP) as u32
}
