//! Item effects
//!
//! Clearing items (bomb, lightning, rainbow) pick a target set and push it through
//! the same clear/drop/refill stage as matches, at their own per-cell rate, then
//! let the normal cascade run. The other items never clear cells.
//!
//! | Item | Targets | Points / cell |
//! |------|---------|---------------|
//! | Bomb | 3x3 block around the cell, clipped to the board | 100 |
//! | Lightning | the row through the cell (longer axis, ties to the row) | 100 |
//! | Rainbow | every cell holding the chosen cell's animal | 150 |
//!
//! Obstacles are never targets.

use arrayvec::ArrayVec;
use log::debug;

use crate::board::Board;
use crate::cascade::{clear_and_settle, resolve_after, Resolution};
use crate::moves::swap_makes_match;
use crate::rng::GameRng;
use crate::types::{Axis, Cell, Direction, ItemKind, Pos, SCORE_PER_CELL, TIME_ITEM_BONUS_SECS};

/// A swap that would produce a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub from: Pos,
    pub to: Pos,
    pub direction: Direction,
}

/// What an item did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEffect {
    Cleared(Resolution),
    TimeAdded(u32),
    Shuffled,
    Hint(Option<Hint>),
}

/// Cells a bomb at `at` would hit, row-major
pub fn bomb_area(board: &Board, at: Pos) -> ArrayVec<Pos, 9> {
    let mut area = ArrayVec::new();
    for dr in -1..=1 {
        for dc in -1..=1 {
            if let Some(p) = at.offset(dr, dc) {
                if board.contains(p) {
                    area.push(p);
                }
            }
        }
    }
    area
}

/// Axis a lightning strike runs along. Row and column are always the same
/// length on a square board, and that tie goes to the row.
pub const LIGHTNING_AXIS: Axis = Axis::Row;

/// Target cells of a clearing item at `at`. Empty for non-clearing items, for
/// positions off the board, and for a rainbow aimed at a non-animal.
pub fn targets(item: ItemKind, board: &Board, at: Pos) -> Vec<Pos> {
    if !board.contains(at) {
        return Vec::new();
    }

    let candidates: Vec<Pos> = match item {
        ItemKind::Bomb => bomb_area(board, at).into_iter().collect(),
        ItemKind::Lightning => match LIGHTNING_AXIS {
            Axis::Row => (0..board.size()).map(|col| Pos::new(at.row, col)).collect(),
            Axis::Column => (0..board.size()).map(|row| Pos::new(row, at.col)).collect(),
        },
        ItemKind::Rainbow => match board.animal_at(at) {
            Some(animal) => board
                .positions()
                .filter(|&p| board.animal_at(p) == Some(animal))
                .collect(),
            None => Vec::new(),
        },
        ItemKind::Time | ItemKind::Shuffle | ItemKind::Hint => Vec::new(),
    };

    candidates
        .into_iter()
        .filter(|&p| board.animal_at(p).is_some())
        .collect()
}

/// Fire an item. Returns `None` when it cannot fire: a clearing item without a
/// target, or with a target set that holds no animals.
pub fn apply(
    item: ItemKind,
    board: &mut Board,
    at: Option<Pos>,
    rng: &mut GameRng,
) -> Option<ItemEffect> {
    match item {
        ItemKind::Bomb | ItemKind::Lightning | ItemKind::Rainbow => {
            let at = at?;
            let per_cell = item.score_per_cell().unwrap_or(SCORE_PER_CELL);
            let cells = targets(item, board, at);
            if cells.is_empty() {
                return None;
            }
            let first = clear_and_settle(board, &cells, per_cell, 1, rng);
            debug!(
                "[Items] {} at ({}, {}) cleared {} cell(s), +{}",
                item.as_str(),
                at.row,
                at.col,
                first.cleared.len(),
                first.score
            );
            Some(ItemEffect::Cleared(resolve_after(board, first, rng)))
        }
        ItemKind::Time => Some(ItemEffect::TimeAdded(TIME_ITEM_BONUS_SECS)),
        ItemKind::Shuffle => {
            shuffle(board, rng);
            Some(ItemEffect::Shuffled)
        }
        ItemKind::Hint => Some(ItemEffect::Hint(find_hint(board))),
    }
}

/// Permute every animal across the non-obstacle cells. Matches created by the
/// shuffle are left on the board.
pub fn shuffle(board: &mut Board, rng: &mut GameRng) {
    let slots: Vec<Pos> = board
        .positions()
        .filter(|&p| board.animal_at(p).is_some())
        .collect();
    let mut animals: Vec<Cell> = slots.iter().filter_map(|&p| board.get(p)).collect();
    rng.shuffle(&mut animals);
    for (pos, cell) in slots.into_iter().zip(animals) {
        board.set(pos, cell);
    }
}

/// First matching swap in row-major position order, trying directions in
/// [`Direction::ALL`] order
pub fn find_hint(board: &Board) -> Option<Hint> {
    let mut scratch = board.clone();
    for from in board.positions() {
        for direction in Direction::ALL {
            let Some(to) = from.step(direction) else {
                continue;
            };
            if swap_makes_match(&mut scratch, from, to) {
                return Some(Hint {
                    from,
                    to,
                    direction,
                });
            }
        }
    }
    None
}
