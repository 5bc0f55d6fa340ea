//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, session logic, terminal rendering).
//!
//! # Board
//!
//! The playfield is a square grid addressed by [`Pos`] (`row` grows downward,
//! `col` grows to the right). Each position holds a [`Cell`]:
//!
//! - **Empty**: transient hole left by a clear, filled again by gravity + refill
//! - **Obstacle**: fixed blocker, never matched, swapped, moved or cleared
//! - **Animal(k)**: a tile of kind `k` in `0..kind_count`
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCORE_PER_CELL` | 100 | Points for every cleared cell in a cascade round |
//! | `RAINBOW_SCORE_PER_CELL` | 150 | Points per cell for the rainbow item's own clear |
//! | `TIME_ITEM_BONUS_SECS` | 10 | Seconds added by the time item |
//!
//! # Examples
//!
//! ```
//! use anipang_types::{Cell, Animal, ItemKind, Pos};
//!
//! let a = Pos::new(3, 3);
//! assert!(a.is_adjacent(Pos::new(4, 4)));
//! assert!(!a.is_adjacent(a));
//!
//! let cell = Cell::Animal(Animal(2));
//! assert_eq!(cell.animal(), Some(Animal(2)));
//! assert!(!Cell::Obstacle.is_movable());
//!
//! assert_eq!(ItemKind::from_str("bomb"), Some(ItemKind::Bomb));
//! assert!(ItemKind::Rainbow.is_targeted());
//! ```

/// Default board side length (8x8)
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Default number of distinct animal kinds
pub const DEFAULT_KIND_COUNT: u8 = 6;

/// Smallest accepted board side length
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest accepted board side length
pub const MAX_BOARD_SIZE: usize = 12;

/// Fewest animal kinds a playable board may use
pub const MIN_KIND_COUNT: u8 = 3;

/// Points awarded per unique cleared cell in a cascade round
pub const SCORE_PER_CELL: u32 = 100;

/// Points awarded per cell cleared by the rainbow item
pub const RAINBOW_SCORE_PER_CELL: u32 = 150;

/// Seconds granted by the time item
pub const TIME_ITEM_BONUS_SECS: u32 = 10;

/// Time limit of the classic (single stage) mode
pub const CLASSIC_TIME_LIMIT_SECS: u32 = 60;

/// Target score of the classic (single stage) mode
pub const CLASSIC_TARGET_SCORE: u32 = 10_000;

/// Number of levels in the progression mode
pub const MAX_LEVEL: u32 = 100;

/// Attempts allowed when rolling a match-free starting board
pub const MAX_GENERATION_ATTEMPTS: u32 = 1000;

/// Starting count of every item in progression mode
pub const DEFAULT_ITEM_COUNT: u32 = 3;

/// Pause between animated cascade rounds in the terminal shell
pub const ROUND_PAUSE_MS: u32 = 300;

/// Pause before a rejected swap is shown as reverted
pub const REJECT_PAUSE_MS: u32 = 300;

/// Fixed timestep of the terminal shell loop (~60 FPS)
pub const TICK_MS: u32 = 16;

/// Length of one countdown step
pub const CLOCK_STEP_MS: u32 = 1000;

/// Board position, row-major (`row` 0 is the top row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev adjacency: the eight surrounding positions, never the position itself
    ///
    /// # Examples
    ///
    /// ```
    /// use anipang_types::Pos;
    ///
    /// let p = Pos::new(2, 2);
    /// assert!(p.is_adjacent(Pos::new(1, 1)));
    /// assert!(p.is_adjacent(Pos::new(2, 3)));
    /// assert!(!p.is_adjacent(Pos::new(2, 4)));
    /// assert!(!p.is_adjacent(p));
    /// ```
    pub fn is_adjacent(&self, other: Pos) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && dr + dc > 0
    }

    /// Offset by a signed delta. Returns `None` when either coordinate would go negative;
    /// the upper bound is the board's concern.
    pub fn offset(&self, dr: i32, dc: i32) -> Option<Pos> {
        let row = self.row as i64 + dr as i64;
        let col = self.col as i64 + dc as i64;
        if row < 0 || col < 0 {
            return None;
        }
        Some(Pos::new(row as usize, col as usize))
    }

    /// Step one cell in `dir`
    pub fn step(&self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        self.offset(dr, dc)
    }
}

/// Display letters for the six stock animals
pub const ANIMAL_LETTERS: [char; 6] = ['D', 'C', 'R', 'B', 'P', 'F'];

/// A tile kind, `0..kind_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Animal(pub u8);

impl Animal {
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Single letter used by text renderers
    pub fn letter(&self) -> char {
        ANIMAL_LETTERS.get(self.index()).copied().unwrap_or('?')
    }
}

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Obstacle,
    Animal(Animal),
}

impl Cell {
    pub fn animal(&self) -> Option<Animal> {
        match self {
            Cell::Animal(a) => Some(*a),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_obstacle(&self) -> bool {
        matches!(self, Cell::Obstacle)
    }

    /// Whether the cell takes part in swaps, gravity and clears
    pub fn is_movable(&self) -> bool {
        matches!(self, Cell::Animal(_))
    }
}

/// Scan axis of a match or a lightning strike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

/// Neighbour directions, in hint-search order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All eight directions in the order the hint search tries them
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// `(row delta, col delta)`
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }
}

/// Consumable items
///
/// - **Bomb**: clears the 3x3 block around a cell
/// - **Lightning**: clears the row (or longer axis) through a cell
/// - **Rainbow**: clears every animal of the chosen cell's kind
/// - **Time**: adds [`TIME_ITEM_BONUS_SECS`] to the clock
/// - **Shuffle**: permutes every animal on the board
/// - **Hint**: reveals a swap that would match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Bomb,
    Lightning,
    Rainbow,
    Time,
    Shuffle,
    Hint,
}

impl ItemKind {
    pub const ALL: [ItemKind; 6] = [
        ItemKind::Bomb,
        ItemKind::Lightning,
        ItemKind::Rainbow,
        ItemKind::Time,
        ItemKind::Shuffle,
        ItemKind::Hint,
    ];

    /// Stable index into per-item tables
    pub fn index(&self) -> usize {
        match self {
            ItemKind::Bomb => 0,
            ItemKind::Lightning => 1,
            ItemKind::Rainbow => 2,
            ItemKind::Time => 3,
            ItemKind::Shuffle => 4,
            ItemKind::Hint => 5,
        }
    }

    /// Items that need a board cell before they fire
    pub fn is_targeted(&self) -> bool {
        matches!(self, ItemKind::Bomb | ItemKind::Lightning | ItemKind::Rainbow)
    }

    /// Points per cell for the item's own clear; `None` for items that clear nothing
    ///
    /// # Examples
    ///
    /// ```
    /// use anipang_types::ItemKind;
    ///
    /// assert_eq!(ItemKind::Bomb.score_per_cell(), Some(100));
    /// assert_eq!(ItemKind::Rainbow.score_per_cell(), Some(150));
    /// assert_eq!(ItemKind::Hint.score_per_cell(), None);
    /// ```
    pub fn score_per_cell(&self) -> Option<u32> {
        match self {
            ItemKind::Bomb | ItemKind::Lightning => Some(SCORE_PER_CELL),
            ItemKind::Rainbow => Some(RAINBOW_SCORE_PER_CELL),
            ItemKind::Time | ItemKind::Shuffle | ItemKind::Hint => None,
        }
    }

    /// Parse item kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bomb" => Some(ItemKind::Bomb),
            "lightning" => Some(ItemKind::Lightning),
            "rainbow" => Some(ItemKind::Rainbow),
            "time" => Some(ItemKind::Time),
            "shuffle" => Some(ItemKind::Shuffle),
            "hint" => Some(ItemKind::Hint),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Bomb => "bomb",
            ItemKind::Lightning => "lightning",
            ItemKind::Rainbow => "rainbow",
            ItemKind::Time => "time",
            ItemKind::Shuffle => "shuffle",
            ItemKind::Hint => "hint",
        }
    }
}

/// Player actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Click the cell under the cursor
    Select,
    UseItem(ItemKind),
    Restart,
    NextLevel,
}
