//! Progression - star ratings, unlocking, and the saved progress record

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use anipang_core::scoring::star_rating;

use crate::types::MAX_LEVEL;

/// Stars (0-3) earned by `score` on a stage with `target`
pub fn rate(score: u32, target: u32) -> u8 {
    star_rating(score, target)
}

/// Highest unlocked level after completing `completed`.
///
/// Completing the current frontier level unlocks the next one, up to `max`.
/// Replaying an earlier level changes nothing.
pub fn advance(unlocked: u32, completed: u32, max: u32) -> u32 {
    if completed >= unlocked && completed < max {
        completed + 1
    } else {
        unlocked
    }
}

/// Persistent campaign progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub unlocked_level: u32,
    /// Best stars per cleared level
    pub level_stars: BTreeMap<u32, u8>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            unlocked_level: 1,
            level_stars: BTreeMap::new(),
        }
    }
}

impl Progress {
    pub fn stars(&self, level: u32) -> u8 {
        self.level_stars.get(&level).copied().unwrap_or(0)
    }

    pub fn is_unlocked(&self, level: u32) -> bool {
        level >= 1 && level <= self.unlocked_level
    }

    pub fn total_stars(&self) -> u32 {
        self.level_stars.values().map(|&s| s as u32).sum()
    }

    /// Record a win on `level`. Stars never go down. Returns whether anything changed.
    pub fn record_win(&mut self, level: u32, stars: u8) -> bool {
        let before_unlocked = self.unlocked_level;
        let old = self.stars(level);
        let best = old.max(stars.min(3));
        if best != old || !self.level_stars.contains_key(&level) {
            self.level_stars.insert(level, best);
        }
        self.unlocked_level = advance(self.unlocked_level, level, MAX_LEVEL);
        best != old || self.unlocked_level != before_unlocked
    }

    /// Clamp out-of-range values read from disk
    pub fn sanitize(&mut self) {
        self.unlocked_level = self.unlocked_level.clamp(1, MAX_LEVEL);
        self.level_stars
            .retain(|&level, stars| (1..=MAX_LEVEL).contains(&level) && *stars <= 3);
    }
}
