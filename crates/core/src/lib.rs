//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the match-3 rules, session state, and cascade
//! simulation. It has **no dependencies** on the terminal, files, or wall-clock
//! time, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised by unit tests on hand-written boards
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: square grid of animals and obstacles, gravity and refill
//! - [`matcher`]: maximal horizontal/vertical runs of three or more
//! - [`cascade`]: clear, drop, refill, re-scan until stable
//! - [`moves`]: swap validation (8-neighbour adjacency, revert on no match)
//! - [`items`]: bomb, lightning, rainbow, time, shuffle, hint
//! - [`scoring`]: per-round points and star ratings
//! - [`session`]: one timed game with an event queue for the shell
//! - [`rng`]: seedable randomness
//!
//! # Game Rules
//!
//! - **Swaps**: Any two Chebyshev-adjacent animals may be swapped; the swap is
//!   undone if it produces no match
//! - **Matches**: 3+ identical animals in a row or column; a longer run is one match
//! - **Cascades**: Cleared cells empty, animals fall, the board refills, repeat
//! - **Scoring**: 100 points per unique cleared cell per round
//! - **Obstacles**: Fixed cells that never match, move, or clear
//!
//! # Example
//!
//! ```
//! use anipang_core::{GameSession, SessionConfig};
//!
//! let mut session = GameSession::start(SessionConfig::default(), 12345);
//! assert!(session.board().is_settled());
//!
//! // One second passes
//! session.tick();
//! assert_eq!(session.time_remaining(), 59);
//! ```
//!
//! # Timing
//!
//! The session clock is advanced by the shell, one [`GameSession::tick`] per
//! elapsed second. Cascades resolve instantly; their rounds are queued as events
//! for the renderer to replay.

pub mod board;
pub mod cascade;
pub mod inventory;
pub mod items;
pub mod matcher;
pub mod moves;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use anipang_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cascade::{resolve, Resolution, RoundEffect};
pub use inventory::Inventory;
pub use items::{find_hint, Hint, ItemEffect};
pub use matcher::{find_matches, has_match, Match};
pub use moves::{try_swap, SwapOutcome, SwapRejection};
pub use rng::GameRng;
pub use scoring::{round_score, star_rating};
pub use session::{
    GameSession, ItemOutcome, SelectOutcome, SessionConfig, SessionEvent, SessionResult,
};
pub use snapshot::GameSnapshot;
