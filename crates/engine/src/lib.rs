//! Game engine module - rules that sit above a single session
//!
//! The core crate plays one game; this crate decides *which* game to play and
//! remembers how it went:
//!
//! - [`levels`]: target score, clock, and obstacle count per level
//! - [`progression`]: star ratings, unlocking, the [`Progress`] record
//! - [`campaign`]: the active level and commit-on-win
//! - [`store`]: JSON persistence of progress
//! - [`config`]: `ANIPANG_*` environment configuration

pub mod campaign;
pub mod config;
pub mod levels;
pub mod progression;
pub mod store;

pub use anipang_core as core;
pub use anipang_types as types;

pub use campaign::Campaign;
pub use config::{GameConfig, GameMode};
pub use levels::LevelConfig;
pub use progression::{advance, rate, Progress};
