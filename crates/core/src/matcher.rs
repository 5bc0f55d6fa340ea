//! Match detection
//!
//! Rows are scanned left to right and columns top to bottom. A run of three equal
//! animals is extended to its full length, recorded once, and scanning resumes
//! right after it. Obstacles and empty cells never match anything.
//!
//! A cell can appear in both a horizontal and a vertical match; callers that clear
//! cells deduplicate (see [`unique_positions`]).

use std::collections::BTreeSet;

use crate::board::Board;
use crate::types::{Animal, Axis, Pos};

/// Minimum run length that counts as a match
pub const MIN_MATCH_LEN: usize = 3;

/// A maximal run of one animal along a single axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub axis: Axis,
    /// Leftmost (row matches) or topmost (column matches) cell
    pub start: Pos,
    pub len: usize,
    pub animal: Animal,
}

impl Match {
    /// Cells of the run in scan order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.len).map(move |i| match self.axis {
            Axis::Row => Pos::new(self.start.row, self.start.col + i),
            Axis::Column => Pos::new(self.start.row + i, self.start.col),
        })
    }
}

/// Find every match on the board, row matches first
pub fn find_matches(board: &Board) -> Vec<Match> {
    let mut matches = Vec::new();
    for line in 0..board.size() {
        scan_line(board, Axis::Row, line, &mut matches);
    }
    for line in 0..board.size() {
        scan_line(board, Axis::Column, line, &mut matches);
    }
    matches
}

/// Cheaper check used by board generation and the hint search
pub fn has_match(board: &Board) -> bool {
    let n = board.size();
    for a in 0..n {
        for b in 0..n.saturating_sub(MIN_MATCH_LEN - 1) {
            if run_starts_at(board, Pos::new(a, b), Axis::Row)
                || run_starts_at(board, Pos::new(b, a), Axis::Column)
            {
                return true;
            }
        }
    }
    false
}

/// Deduplicated, sorted cells touched by any match
pub fn unique_positions(matches: &[Match]) -> Vec<Pos> {
    let set: BTreeSet<Pos> = matches.iter().flat_map(|m| m.positions()).collect();
    set.into_iter().collect()
}

fn along(axis: Axis, line: usize, i: usize) -> Pos {
    match axis {
        Axis::Row => Pos::new(line, i),
        Axis::Column => Pos::new(i, line),
    }
}

fn run_starts_at(board: &Board, start: Pos, axis: Axis) -> bool {
    let Some(animal) = board.animal_at(start) else {
        return false;
    };
    let (second, third) = match axis {
        Axis::Row => (Pos::new(start.row, start.col + 1), Pos::new(start.row, start.col + 2)),
        Axis::Column => (Pos::new(start.row + 1, start.col), Pos::new(start.row + 2, start.col)),
    };
    board.animal_at(second) == Some(animal) && board.animal_at(third) == Some(animal)
}

fn scan_line(board: &Board, axis: Axis, line: usize, out: &mut Vec<Match>) {
    let n = board.size();
    let mut i = 0;
    while i + MIN_MATCH_LEN <= n {
        let start = along(axis, line, i);
        if !run_starts_at(board, start, axis) {
            i += 1;
            continue;
        }

        // Both checked above: the run is at least MIN_MATCH_LEN long
        let animal = match board.animal_at(start) {
            Some(a) => a,
            None => break,
        };
        let mut end = i + MIN_MATCH_LEN;
        while end < n && board.animal_at(along(axis, line, end)) == Some(animal) {
            end += 1;
        }

        out.push(Match {
            axis,
            start,
            len: end - i,
            animal,
        });
        i = end;
    }
}
