use crate::board::Board;
use crate::inventory::Inventory;
use crate::items::Hint;
use crate::session::SessionResult;
use crate::types::{ItemKind, Pos, DEFAULT_BOARD_SIZE, DEFAULT_KIND_COUNT};

/// Read-only view of a session for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    /// Cells to highlight as just cleared (set by the shell while replaying rounds)
    pub flash: Vec<Pos>,
    pub score: u32,
    pub target_score: u32,
    pub time_remaining: u32,
    pub time_limit: u32,
    pub level: Option<u32>,
    pub selected: Option<Pos>,
    pub armed: Option<ItemKind>,
    pub hint: Option<Hint>,
    pub inventory: Inventory,
    pub running: bool,
    pub processing: bool,
    pub result: Option<SessionResult>,
    pub seed: u64,
    pub moves: u32,
    pub best_chain: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = Board::new(DEFAULT_BOARD_SIZE, DEFAULT_KIND_COUNT);
        self.flash.clear();
        self.score = 0;
        self.target_score = 0;
        self.time_remaining = 0;
        self.time_limit = 0;
        self.level = None;
        self.selected = None;
        self.armed = None;
        self.hint = None;
        self.inventory = Inventory::empty();
        self.running = false;
        self.processing = false;
        self.result = None;
        self.seed = 0;
        self.moves = 0;
        self.best_chain = 0;
    }

    /// Whether board input would currently be accepted
    pub fn playable(&self) -> bool {
        self.running && !self.processing
    }

    pub fn is_flashing(&self, pos: Pos) -> bool {
        self.flash.contains(&pos)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::new(DEFAULT_BOARD_SIZE, DEFAULT_KIND_COUNT),
            flash: Vec::new(),
            score: 0,
            target_score: 0,
            time_remaining: 0,
            time_limit: 0,
            level: None,
            selected: None,
            armed: None,
            hint: None,
            inventory: Inventory::empty(),
            running: false,
            processing: false,
            result: None,
            seed: 0,
            moves: 0,
            best_chain: 0,
        }
    }
}
