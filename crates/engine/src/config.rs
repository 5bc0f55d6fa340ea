//! Game configuration from environment variables

use std::path::PathBuf;

use crate::types::{
    DEFAULT_BOARD_SIZE, DEFAULT_ITEM_COUNT, DEFAULT_KIND_COUNT, MAX_BOARD_SIZE, MAX_LEVEL,
    MIN_BOARD_SIZE, MIN_KIND_COUNT,
};

pub const DEFAULT_PROGRESS_PATH: &str = "anipang-progress.json";

/// Which rules the shell plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// One 60 second game, no levels, no items
    Classic,
    #[default]
    Levels,
}

impl GameMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "levels" | "level" | "campaign" => Some(Self::Levels),
            _ => None,
        }
    }
}

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed seed; random when `None`
    pub seed: Option<u64>,
    pub mode: GameMode,
    /// Level to start on; the highest unlocked one when `None`
    pub start_level: Option<u32>,
    pub board_size: usize,
    pub kind_count: u8,
    /// Starting uses of every item in campaign levels
    pub item_count: u32,
    pub progress_path: PathBuf,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            mode: GameMode::default(),
            start_level: None,
            board_size: DEFAULT_BOARD_SIZE,
            kind_count: DEFAULT_KIND_COUNT,
            item_count: DEFAULT_ITEM_COUNT,
            progress_path: PathBuf::from(DEFAULT_PROGRESS_PATH),
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from `ANIPANG_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = get("ANIPANG_SEED").and_then(|s| s.parse().ok());
        let mode = get("ANIPANG_MODE")
            .and_then(|s| GameMode::parse(&s))
            .unwrap_or(defaults.mode);
        let start_level = get("ANIPANG_LEVEL")
            .and_then(|s| s.parse::<u32>().ok())
            .map(|l| l.clamp(1, MAX_LEVEL));
        let board_size = get("ANIPANG_BOARD_SIZE")
            .and_then(|s| s.parse::<usize>().ok())
            .map(|n| n.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE))
            .unwrap_or(defaults.board_size);
        let kind_count = get("ANIPANG_KINDS")
            .and_then(|s| s.parse::<u8>().ok())
            .map(|n| n.clamp(MIN_KIND_COUNT, DEFAULT_KIND_COUNT))
            .unwrap_or(defaults.kind_count);
        let item_count = get("ANIPANG_ITEMS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.item_count);
        let progress_path = get("ANIPANG_PROGRESS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.progress_path);
        let log_path = get("ANIPANG_LOG_PATH");

        Self {
            seed,
            mode,
            start_level,
            board_size,
            kind_count,
            item_count,
            progress_path,
            log_path,
        }
    }
}
