//! Swap validation
//!
//! A swap is legal when both cells are on the board, hold animals, and are
//! Chebyshev-adjacent (diagonals included). A legal swap that produces no match is
//! undone, leaving the board exactly as it was.

use crate::board::Board;
use crate::cascade::{resolve, Resolution};
use crate::matcher::has_match;
use crate::rng::GameRng;
use crate::types::Pos;

/// Why a swap was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapRejection {
    OutOfBounds,
    NotAdjacent,
    /// One of the cells is an obstacle (or empty)
    Immovable,
    /// The swap was tried and reverted
    NoMatch,
}

/// Result of [`try_swap`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The swap stuck; the cascade it started has been resolved
    Accepted(Resolution),
    Rejected(SwapRejection),
}

impl SwapOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SwapOutcome::Accepted(_))
    }

    pub fn score(&self) -> u32 {
        match self {
            SwapOutcome::Accepted(res) => res.total_score,
            SwapOutcome::Rejected(_) => 0,
        }
    }
}

/// Check the static preconditions of a swap without touching the board
pub fn check_swap(board: &Board, a: Pos, b: Pos) -> Result<(), SwapRejection> {
    let (Some(ca), Some(cb)) = (board.get(a), board.get(b)) else {
        return Err(SwapRejection::OutOfBounds);
    };
    if !a.is_adjacent(b) {
        return Err(SwapRejection::NotAdjacent);
    }
    if !ca.is_movable() || !cb.is_movable() {
        return Err(SwapRejection::Immovable);
    }
    Ok(())
}

/// Whether swapping `a` and `b` would create a match. The board is left unchanged.
pub fn swap_makes_match(board: &mut Board, a: Pos, b: Pos) -> bool {
    if check_swap(board, a, b).is_err() {
        return false;
    }
    board.swap(a, b);
    let matched = has_match(board);
    board.swap(a, b);
    matched
}

/// Try to swap two cells and resolve the resulting cascade.
pub fn try_swap(board: &mut Board, a: Pos, b: Pos, rng: &mut GameRng) -> SwapOutcome {
    if let Err(reason) = check_swap(board, a, b) {
        return SwapOutcome::Rejected(reason);
    }

    board.swap(a, b);
    if !has_match(board) {
        board.swap(a, b);
        return SwapOutcome::Rejected(SwapRejection::NoMatch);
    }

    SwapOutcome::Accepted(resolve(board, rng))
}
