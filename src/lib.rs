//! Anipang (workspace facade crate).
//!
//! Re-exports the `anipang::{core,engine,input,term,types}` API from the dedicated
//! crates under `crates/`, plus the terminal [`app::App`] that wires them together.

pub mod app;

pub use anipang_core as core;
pub use anipang_engine as engine;
pub use anipang_input as input;
pub use anipang_term as term;
pub use anipang_types as types;

pub use app::App;
