//! Board module - manages the game grid
//!
//! The board is a `size x size` grid where each cell is empty, an obstacle, or an
//! animal. Uses a flat vector in row-major order (`row * size + col`).
//! Row 0 is the top of the board; gravity pulls toward higher row indices.
//!
//! Obstacles are fixed. They split each column into independent segments:
//! animals above an obstacle never fall past it.

use log::{debug, warn};

use crate::matcher::has_match;
use crate::rng::GameRng;
use crate::types::{Animal, Cell, Pos, DEFAULT_KIND_COUNT, MAX_GENERATION_ATTEMPTS};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    kind_count: u8,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board.
    ///
    /// `kind_count` below 2 is raised to 2: a single kind can never be match-free.
    pub fn new(size: usize, kind_count: u8) -> Self {
        Self {
            size,
            kind_count: kind_count.max(2),
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Create a playable board: obstacles at `obstacles`, random animals everywhere
    /// else, and no match anywhere.
    ///
    /// Non-obstacle cells are re-rolled until the board is match-free. After
    /// [`MAX_GENERATION_ATTEMPTS`] failed rolls a deterministic tiling is used instead.
    pub fn create(size: usize, kind_count: u8, obstacles: &[Pos], rng: &mut GameRng) -> Self {
        let mut board = Self::new(size, kind_count);
        for &pos in obstacles {
            board.set(pos, Cell::Obstacle);
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            board.roll(rng);
            if !has_match(&board) {
                debug!("[Board] match-free {}x{} board after {} roll(s)", size, size, attempt);
                return board;
            }
        }

        warn!(
            "[Board] no match-free roll after {} attempts, using fallback tiling",
            MAX_GENERATION_ATTEMPTS
        );
        board.fill_fallback_tiling();
        board
    }

    /// Parse a board from text rows: `0`-`9` are animals, `#` is an obstacle and
    /// `.` is empty. Returns `None` when the rows are not a square of known symbols.
    ///
    /// The kind count is the default, or larger if the rows use a higher digit.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        if size == 0 {
            return None;
        }

        let mut cells = Vec::with_capacity(size * size);
        let mut max_kind = 0u8;
        for row in rows {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != size {
                return None;
            }
            for ch in chars {
                let cell = match ch {
                    '.' => Cell::Empty,
                    '#' => Cell::Obstacle,
                    d => {
                        let k = d.to_digit(10)? as u8;
                        max_kind = max_kind.max(k + 1);
                        Cell::Animal(Animal(k))
                    }
                };
                cells.push(cell);
            }
        }

        Some(Self {
            size,
            kind_count: DEFAULT_KIND_COUNT.max(max_kind),
            cells,
        })
    }

    /// Inverse of [`Board::from_rows`]
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.size)
            .map(|row| {
                self.row(row)
                    .iter()
                    .map(|cell| match cell {
                        Cell::Empty => '.',
                        Cell::Obstacle => '#',
                        Cell::Animal(a) => char::from_digit(a.0 as u32, 10).unwrap_or('?'),
                    })
                    .collect()
            })
            .collect()
    }

    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        Some(pos.row * self.size + pos.col)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of animal kinds refills draw from
    pub fn kind_count(&self) -> u8 {
        self.kind_count
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos).is_some()
    }

    /// Get cell at `pos`, `None` if out of bounds
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at `pos`. Returns false if out of bounds
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Animal at `pos`, if any
    pub fn animal_at(&self, pos: Pos) -> Option<Animal> {
        self.get(pos).and_then(|cell| cell.animal())
    }

    pub fn is_obstacle(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(Cell::Obstacle))
    }

    /// One row of cells
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Pos::new(row, col)))
    }

    /// Positions of obstacles, row-major
    pub fn obstacles(&self) -> Vec<Pos> {
        self.positions().filter(|&p| self.is_obstacle(p)).collect()
    }

    /// Exchange two cells. No legality check; returns false if either is out of bounds
    pub fn swap(&mut self, a: Pos, b: Pos) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// Compact animals downward in every column segment, keeping their order.
    /// Returns true if any cell moved.
    pub fn apply_gravity(&mut self) -> bool {
        let n = self.size;
        let mut moved = false;

        for col in 0..n {
            // Next free slot, counted from the bottom of the current segment
            let mut write = n as isize - 1;
            for row in (0..n).rev() {
                let idx = row * n + col;
                match self.cells[idx] {
                    Cell::Obstacle => write = row as isize - 1,
                    Cell::Animal(_) => {
                        if write != row as isize {
                            let dst = write as usize * n + col;
                            self.cells[dst] = self.cells[idx];
                            self.cells[idx] = Cell::Empty;
                            moved = true;
                        }
                        write -= 1;
                    }
                    Cell::Empty => {}
                }
            }
        }

        moved
    }

    /// Fill every empty cell with a random animal. Returns the filled positions,
    /// row-major.
    pub fn refill(&mut self, rng: &mut GameRng) -> Vec<Pos> {
        let mut filled = Vec::new();
        for idx in 0..self.cells.len() {
            if self.cells[idx].is_empty() {
                self.cells[idx] = Cell::Animal(Animal(rng.next_below(self.kind_count as u32) as u8));
                filled.push(Pos::new(idx / self.size, idx % self.size));
            }
        }
        filled
    }

    /// True when no empty cell sits above an animal in the same column segment
    pub fn is_settled(&self) -> bool {
        for col in 0..self.size {
            let mut hole_above = false;
            for row in 0..self.size {
                match self.cells[row * self.size + col] {
                    Cell::Obstacle => hole_above = false,
                    Cell::Empty => hole_above = true,
                    Cell::Animal(_) if hole_above => return false,
                    Cell::Animal(_) => {}
                }
            }
        }
        true
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Count of cells holding `animal`
    pub fn count_animal(&self, animal: Animal) -> usize {
        self.cells
            .iter()
            .filter(|c| c.animal() == Some(animal))
            .count()
    }

    /// Re-roll every non-obstacle cell
    fn roll(&mut self, rng: &mut GameRng) {
        for cell in &mut self.cells {
            if !cell.is_obstacle() {
                *cell = Cell::Animal(Animal(rng.next_below(self.kind_count as u32) as u8));
            }
        }
    }

    /// 2x2 checkerboard of two kinds: runs never exceed two cells on either axis
    fn fill_fallback_tiling(&mut self) {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let idx = row * n + col;
                if !self.cells[idx].is_obstacle() {
                    let kind = ((row / 2 + col / 2) % 2) as u8;
                    self.cells[idx] = Cell::Animal(Animal(kind));
                }
            }
        }
    }
}
