//! Level rules - target, clock, and obstacles per stage

use anipang_core::{Inventory, SessionConfig};

use crate::types::{CLASSIC_TARGET_SCORE, CLASSIC_TIME_LIMIT_SECS, MAX_LEVEL};

/// Base target score of level 1
pub const BASE_TARGET_SCORE: u32 = 5000;
/// Target increase per level
pub const TARGET_STEP: u32 = 500;
/// Clock of level 1, in seconds
pub const BASE_TIME_LIMIT_SECS: u32 = 60;
/// The clock never drops below this
pub const MIN_TIME_LIMIT_SECS: u32 = 30;
/// First level with obstacles
pub const OBSTACLE_START_LEVEL: u32 = 30;
pub const MAX_OBSTACLES: usize = 10;

/// Rules of one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelConfig {
    /// `None` for a classic game outside the campaign
    pub level: Option<u32>,
    pub target_score: u32,
    pub time_limit: u32,
    pub obstacle_count: usize,
}

impl LevelConfig {
    /// Classic rules: one 60 second game against a 10000 point target
    pub fn classic() -> Self {
        Self {
            level: None,
            target_score: CLASSIC_TARGET_SCORE,
            time_limit: CLASSIC_TIME_LIMIT_SECS,
            obstacle_count: 0,
        }
    }

    /// Rules for a campaign level. `level` is clamped to `1..=MAX_LEVEL`.
    pub fn for_level(level: u32) -> Self {
        let level = level.clamp(1, MAX_LEVEL);
        let steps = level - 1;
        let obstacle_count = if level < OBSTACLE_START_LEVEL {
            0
        } else {
            (((level - OBSTACLE_START_LEVEL) / 5 + 2) as usize).min(MAX_OBSTACLES)
        };

        Self {
            level: Some(level),
            target_score: BASE_TARGET_SCORE + TARGET_STEP * steps,
            time_limit: BASE_TIME_LIMIT_SECS
                .saturating_sub(steps / 5)
                .max(MIN_TIME_LIMIT_SECS),
            obstacle_count,
        }
    }

    /// Items are a campaign feature; classic games start with none
    pub fn allows_items(&self) -> bool {
        self.level.is_some()
    }

    /// Session parameters for this stage
    pub fn session_config(&self, board_size: usize, kind_count: u8, item_count: u32) -> SessionConfig {
        let items = if self.allows_items() {
            Inventory::uniform(item_count)
        } else {
            Inventory::empty()
        };
        SessionConfig {
            board_size,
            kind_count,
            time_limit: self.time_limit,
            target_score: self.target_score,
            obstacle_count: self.obstacle_count,
            items,
            level: self.level,
        }
    }
}
