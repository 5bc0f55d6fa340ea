//! Campaign - the active level and the progress it feeds

use log::info;

use anipang_core::SessionResult;

use crate::levels::LevelConfig;
use crate::progression::Progress;
use crate::types::MAX_LEVEL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    progress: Progress,
    current: u32,
}

impl Campaign {
    /// Resume at the highest unlocked level
    pub fn new(progress: Progress) -> Self {
        let current = progress.unlocked_level.clamp(1, MAX_LEVEL);
        Self { progress, current }
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn current_level(&self) -> u32 {
        self.current
    }

    pub fn level_config(&self) -> LevelConfig {
        LevelConfig::for_level(self.current)
    }

    /// Switch to `level`. Locked or out-of-range levels are refused.
    pub fn start_level(&mut self, level: u32) -> Option<LevelConfig> {
        if level > MAX_LEVEL || !self.progress.is_unlocked(level) {
            return None;
        }
        self.current = level;
        Some(LevelConfig::for_level(level))
    }

    /// The level after the current one, if it is unlocked
    pub fn next_level(&self) -> Option<u32> {
        let next = self.current + 1;
        (next <= MAX_LEVEL && self.progress.is_unlocked(next)).then_some(next)
    }

    /// Apply a finished session. Only wins on a campaign level count; returns
    /// whether progress changed.
    pub fn commit(&mut self, result: &SessionResult) -> bool {
        let Some(level) = result.level else {
            return false;
        };
        if !result.won {
            return false;
        }

        let changed = self.progress.record_win(level, result.stars);
        info!(
            "[Campaign] level {} cleared with {} star(s), unlocked={} changed={}",
            level, result.stars, self.progress.unlocked_level, changed
        );
        changed
    }
}
