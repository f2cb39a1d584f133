//! Game catalog types
//!
//! Read-only game configuration consumed by the feed scoring engine.

use serde::{Deserialize, Serialize};

/// A promotional campaign window attached to a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    /// Larger priority ranks higher among concurrent campaigns
    #[serde(default)]
    pub priority: i64,
    /// Window start (epoch ms); None means open-ended
    #[serde(default)]
    pub start_ms: Option<i64>,
    /// Window end (epoch ms); None means open-ended
    #[serde(default)]
    pub end_ms: Option<i64>,
}

impl Campaign {
    /// Whether the window covers the given instant (bounds inclusive,
    /// open ends always pass)
    pub fn is_active(&self, now_ms: i64) -> bool {
        let after_start = self.start_ms.map_or(true, |start| now_ms >= start);
        let before_end = self.end_ms.map_or(true, |end| now_ms <= end);
        after_start && before_end
    }
}

/// Curated flags and campaigns for a game
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameMetadata {
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

/// One game's catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub game_id: String,
    pub title: String,
    /// Only visible to beta testers
    #[serde(default)]
    pub beta_only: bool,
    /// Creation time (epoch ms)
    pub created_at: i64,
    /// Last content update (epoch ms)
    pub updated_at: i64,
    #[serde(default)]
    pub metadata: GameMetadata,
}

impl GameConfig {
    /// Minimal config for tests and the demo seed
    pub fn new(game_id: impl Into<String>, title: impl Into<String>, created_at: i64) -> Self {
        Self {
            game_id: game_id.into(),
            title: title.into(),
            beta_only: false,
            created_at,
            updated_at: created_at,
            metadata: GameMetadata::default(),
        }
    }

    /// The highest-priority campaign active at the given instant
    pub fn active_campaign(&self, now_ms: i64) -> Option<&Campaign> {
        self.metadata
            .campaigns
            .iter()
            .filter(|c| c.is_active(now_ms))
            .max_by_key(|c| c.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_window_bounds_inclusive() {
        let campaign = Campaign {
            name: "launch".into(),
            priority: 0,
            start_ms: Some(100),
            end_ms: Some(200),
        };
        assert!(!campaign.is_active(99));
        assert!(campaign.is_active(100));
        assert!(campaign.is_active(200));
        assert!(!campaign.is_active(201));
    }

    #[test]
    fn test_open_ended_campaign() {
        let campaign = Campaign {
            name: "evergreen".into(),
            priority: 0,
            start_ms: None,
            end_ms: None,
        };
        assert!(campaign.is_active(0));
        assert!(campaign.is_active(i64::MAX));
    }

    #[test]
    fn test_highest_priority_active_campaign_wins() {
        let mut game = GameConfig::new("slots", "Slots", 0);
        game.metadata.campaigns = vec![
            Campaign { name: "a".into(), priority: 1, start_ms: None, end_ms: None },
            Campaign { name: "b".into(), priority: 5, start_ms: Some(1_000), end_ms: None },
            Campaign { name: "c".into(), priority: 9, start_ms: None, end_ms: Some(500) },
        ];
        // "c" already ended, "b" outranks "a"
        let active = game.active_campaign(2_000).unwrap();
        assert_eq!(active.name, "b");
    }
}
