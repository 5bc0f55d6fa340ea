//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout frameworks and instead renders into a simple
//! framebuffer that is diffed and flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render a session purely from its `GameSnapshot`
//! - Keep board cells roughly square (2 columns per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use anipang_core as core;
pub use anipang_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
