//! Cascade resolution - clear, drop, refill, re-scan
//!
//! One player action (a swap or an item) can trigger a chain of rounds:
//!
//! 1. Find all matches; stop if there are none
//! 2. Score `unique cells x SCORE_PER_CELL`
//! 3. Empty those cells, apply gravity, refill
//! 4. Record the round and go back to 1
//!
//! The result is an ordered list of [`RoundEffect`]s. The engine itself never
//! waits between rounds; a renderer can replay them at whatever pace it likes.

use std::collections::BTreeSet;

use log::debug;

use crate::board::Board;
use crate::matcher::{find_matches, unique_positions};
use crate::rng::GameRng;
use crate::scoring::round_score;
use crate::types::{Cell, Pos, SCORE_PER_CELL};

/// Everything that happened in one clear/drop/refill round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEffect {
    /// 1-based position of the round in its chain
    pub chain: u32,
    /// Cleared cells, deduplicated, row-major
    pub cleared: Vec<Pos>,
    /// Cells filled with fresh animals after gravity
    pub refilled: Vec<Pos>,
    pub score: u32,
    /// Board after the refill
    pub board: Board,
}

/// Outcome of a full cascade
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub total_score: u32,
    pub rounds: Vec<RoundEffect>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Number of rounds, i.e. the combo length
    pub fn chain_len(&self) -> usize {
        self.rounds.len()
    }

    /// Total cells cleared over all rounds
    pub fn cleared_count(&self) -> usize {
        self.rounds.iter().map(|r| r.cleared.len()).sum()
    }

    fn push(&mut self, round: RoundEffect) {
        self.total_score = self.total_score.saturating_add(round.score);
        self.rounds.push(round);
    }
}

/// Clear `targets`, score them, then apply gravity and refill.
///
/// Targets are deduplicated; obstacles, empty and out-of-bounds cells are skipped and
/// do not score. This is the shared removal stage for matches and items.
pub fn clear_and_settle(
    board: &mut Board,
    targets: &[Pos],
    per_cell: u32,
    chain: u32,
    rng: &mut GameRng,
) -> RoundEffect {
    let cleared: Vec<Pos> = targets
        .iter()
        .copied()
        .filter(|&p| board.animal_at(p).is_some())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    for &pos in &cleared {
        board.set(pos, Cell::Empty);
    }
    board.apply_gravity();
    let refilled = board.refill(rng);

    RoundEffect {
        chain,
        score: round_score(cleared.len(), per_cell),
        cleared,
        refilled,
        board: board.clone(),
    }
}

/// Resolve matches until the board is stable
pub fn resolve(board: &mut Board, rng: &mut GameRng) -> Resolution {
    let mut resolution = Resolution::default();
    run_chain(board, &mut resolution, rng);
    resolution
}

/// Resolve a cascade that starts with an already-applied round (an item clear)
pub fn resolve_after(board: &mut Board, first: RoundEffect, rng: &mut GameRng) -> Resolution {
    let mut resolution = Resolution::default();
    resolution.push(first);
    run_chain(board, &mut resolution, rng);
    resolution
}

fn run_chain(board: &mut Board, resolution: &mut Resolution, rng: &mut GameRng) {
    loop {
        let matches = find_matches(board);
        if matches.is_empty() {
            break;
        }

        let cells = unique_positions(&matches);
        let chain = resolution.rounds.len() as u32 + 1;
        let round = clear_and_settle(board, &cells, SCORE_PER_CELL, chain, rng);
        debug!(
            "[Cascade] round {}: {} match(es), {} cell(s), +{}",
            chain,
            matches.len(),
            round.cleared.len(),
            round.score
        );
        resolution.push(round);
    }
}
