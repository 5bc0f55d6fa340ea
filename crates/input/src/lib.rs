//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::InputAction`] and provides a
//! board cursor that turns those actions into session commands.

pub mod cursor;
pub mod map;

pub use anipang_types as types;

pub use cursor::{Command, Cursor};
pub use map::{handle_key_event, should_quit};
