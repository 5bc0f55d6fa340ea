//! Game session - one timed round of play
//!
//! A [`GameSession`] owns the board, RNG, score, clock, selection, and item
//! inventory of a single game. It is driven by a shell through a handful of
//! commands (`select`, `propose_swap`, `activate_item`, `tick`, `end`) and reports
//! what happened through an ordered queue of [`SessionEvent`]s.
//!
//! Every command resolves its consequences immediately; the queue only lets a
//! renderer replay cascade rounds at its own pace. While round events are
//! still waiting in the queue the session is *processing* and refuses further
//! board input, but the board, score, and clock never depend on how quickly
//! the queue is drained.

use std::collections::VecDeque;

use log::{debug, info};

use crate::board::Board;
use crate::cascade::{Resolution, RoundEffect};
use crate::inventory::Inventory;
use crate::items::{self, Hint, ItemEffect};
use crate::moves::{try_swap, SwapOutcome, SwapRejection};
use crate::rng::GameRng;
use crate::scoring::star_rating;
use crate::snapshot::GameSnapshot;
use crate::types::{
    ItemKind, Pos, CLASSIC_TARGET_SCORE, CLASSIC_TIME_LIMIT_SECS, DEFAULT_BOARD_SIZE,
    DEFAULT_KIND_COUNT,
};

/// Parameters of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub board_size: usize,
    pub kind_count: u8,
    pub time_limit: u32,
    pub target_score: u32,
    pub obstacle_count: usize,
    pub items: Inventory,
    /// Campaign level, `None` for a free game
    pub level: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            kind_count: DEFAULT_KIND_COUNT,
            time_limit: CLASSIC_TIME_LIMIT_SECS,
            target_score: CLASSIC_TARGET_SCORE,
            obstacle_count: 0,
            items: Inventory::empty(),
            level: None,
        }
    }
}

/// Final outcome of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    pub final_score: u32,
    pub target_score: u32,
    pub won: bool,
    pub stars: u8,
    pub level: Option<u32>,
}

/// Notifications for the shell, in the order they happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Selection changed (`None` when cleared)
    Selected(Option<Pos>),
    /// A swap was accepted; its rounds follow
    Swapped { a: Pos, b: Pos },
    SwapRejected {
        a: Pos,
        b: Pos,
        reason: SwapRejection,
    },
    /// One clear/drop/refill round, carrying the board after it
    Round(RoundEffect),
    Score { delta: u32, total: u32 },
    Time { delta: i32, remaining: u32 },
    ItemArmed(ItemKind),
    ItemCancelled(ItemKind),
    ItemUsed { item: ItemKind, remaining: u32 },
    Hint(Option<Hint>),
    Shuffled,
    Ended(SessionResult),
}

/// What a [`GameSession::select`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    Deselected,
    /// The selection jumped to a non-adjacent cell
    Moved,
    Swapped(SwapOutcome),
    /// An armed item fired at the clicked cell (or refused to)
    ItemFired(ItemOutcome),
    Ignored,
}

/// What a [`GameSession::activate_item`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// A targeted item is waiting for a cell
    Armed,
    /// The armed item was put away again
    Cancelled,
    Fired(ItemEffect),
    /// No uses left, or the target holds nothing to clear
    Inert,
    /// The session is not accepting input
    Ignored,
}

/// A single game
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    rng: GameRng,
    score: u32,
    time_remaining: u32,
    running: bool,
    result: Option<SessionResult>,
    selected: Option<Pos>,
    armed: Option<ItemKind>,
    hint: Option<Hint>,
    inventory: Inventory,
    events: VecDeque<SessionEvent>,
    pending_rounds: usize,
    moves: u32,
    best_chain: u32,
}

impl GameSession {
    /// Build a fresh board and start the clock
    pub fn start(config: SessionConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let size = config.board_size;
        let obstacle_count = config.obstacle_count.min(size * size / 4);
        let obstacles: Vec<Pos> = rng
            .sample_indices(size * size, obstacle_count)
            .into_iter()
            .map(|i| Pos::new(i / size, i % size))
            .collect();
        let board = Board::create(size, config.kind_count, &obstacles, &mut rng);

        info!(
            "[Session] start seed={} size={} kinds={} target={} time={}s obstacles={} level={:?}",
            seed,
            size,
            board.kind_count(),
            config.target_score,
            config.time_limit,
            obstacles.len(),
            config.level
        );

        Self {
            board,
            rng,
            score: 0,
            time_remaining: config.time_limit,
            running: true,
            result: None,
            selected: None,
            armed: None,
            hint: None,
            inventory: config.items,
            events: VecDeque::new(),
            pending_rounds: 0,
            moves: 0,
            best_chain: 0,
            config,
        }
    }

    /// Start on a prepared board instead of a generated one. The board's size
    /// overrides `config.board_size`.
    pub fn from_board(mut config: SessionConfig, board: Board, seed: u64) -> Self {
        config.board_size = board.size();
        let mut session = Self::start(
            SessionConfig {
                obstacle_count: 0,
                ..config.clone()
            },
            seed,
        );
        session.board = board;
        session.config = config;
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True while round events are waiting to be delivered
    pub fn is_processing(&self) -> bool {
        self.pending_rounds > 0
    }

    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    pub fn armed(&self) -> Option<ItemKind> {
        self.armed
    }

    pub fn hint(&self) -> Option<Hint> {
        self.hint
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn result(&self) -> Option<SessionResult> {
        self.result
    }

    /// Accepted swaps so far
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Longest cascade seen so far
    pub fn best_chain(&self) -> u32 {
        self.best_chain
    }

    fn accepts_input(&self) -> bool {
        self.running && !self.is_processing()
    }

    /// Next undelivered event
    pub fn poll_event(&mut self) -> Option<SessionEvent> {
        let event = self.events.pop_front()?;
        if matches!(event, SessionEvent::Round(_)) {
            self.pending_rounds = self.pending_rounds.saturating_sub(1);
        }
        Some(event)
    }

    /// Deliver everything at once
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.pending_rounds = 0;
        self.events.drain(..).collect()
    }

    /// Click on a cell.
    ///
    /// With a targeted item armed the click fires it. Otherwise: nothing selected
    /// selects; the selected cell deselects; an adjacent cell attempts a swap
    /// (and clears the selection either way); any other cell moves the selection.
    pub fn select(&mut self, pos: Pos) -> SelectOutcome {
        if !self.accepts_input() || !self.board.contains(pos) {
            return SelectOutcome::Ignored;
        }

        if let Some(item) = self.armed {
            return SelectOutcome::ItemFired(self.activate_item(item, Some(pos)));
        }

        match self.selected {
            None => {
                self.set_selected(Some(pos));
                SelectOutcome::Selected
            }
            Some(current) if current == pos => {
                self.set_selected(None);
                SelectOutcome::Deselected
            }
            Some(current) if current.is_adjacent(pos) => {
                self.set_selected(None);
                match self.propose_swap(current, pos) {
                    Some(outcome) => SelectOutcome::Swapped(outcome),
                    None => SelectOutcome::Ignored,
                }
            }
            Some(_) => {
                self.set_selected(Some(pos));
                SelectOutcome::Moved
            }
        }
    }

    fn set_selected(&mut self, pos: Option<Pos>) {
        self.selected = pos;
        self.events.push_back(SessionEvent::Selected(pos));
    }

    /// Swap two cells. `None` when the session is not accepting input.
    pub fn propose_swap(&mut self, a: Pos, b: Pos) -> Option<SwapOutcome> {
        if !self.accepts_input() {
            return None;
        }

        let outcome = try_swap(&mut self.board, a, b, &mut self.rng);
        match &outcome {
            SwapOutcome::Accepted(resolution) => {
                self.moves += 1;
                self.hint = None;
                self.events.push_back(SessionEvent::Swapped { a, b });
                self.apply_resolution(resolution);
            }
            SwapOutcome::Rejected(reason) => {
                debug!("[Session] swap {:?} <-> {:?} rejected: {:?}", a, b, reason);
                self.events.push_back(SessionEvent::SwapRejected {
                    a,
                    b,
                    reason: *reason,
                });
            }
        }
        Some(outcome)
    }

    fn apply_resolution(&mut self, resolution: &Resolution) {
        for round in &resolution.rounds {
            self.events.push_back(SessionEvent::Round(round.clone()));
            self.pending_rounds += 1;
        }
        self.best_chain = self.best_chain.max(resolution.chain_len() as u32);
        debug!(
            "[Session] {} round(s) cleared {} cell(s) for {}",
            resolution.chain_len(),
            resolution.cleared_count(),
            resolution.total_score
        );
        if resolution.total_score > 0 {
            self.score = self.score.saturating_add(resolution.total_score);
            self.events.push_back(SessionEvent::Score {
                delta: resolution.total_score,
                total: self.score,
            });
        }
    }

    /// Use an item.
    ///
    /// A targeted item given no target is armed; asking for it again while armed
    /// cancels it. Arming never spends a use. An item with no uses left, or one
    /// aimed at a cell with nothing to clear, is inert and stays armed.
    pub fn activate_item(&mut self, item: ItemKind, target: Option<Pos>) -> ItemOutcome {
        if !self.accepts_input() {
            return ItemOutcome::Ignored;
        }
        if self.inventory.count(item) == 0 {
            return ItemOutcome::Inert;
        }

        if item.is_targeted() && target.is_none() {
            if self.armed == Some(item) {
                self.armed = None;
                self.events.push_back(SessionEvent::ItemCancelled(item));
                return ItemOutcome::Cancelled;
            }
            self.armed = Some(item);
            self.events.push_back(SessionEvent::ItemArmed(item));
            return ItemOutcome::Armed;
        }

        let Some(effect) = items::apply(item, &mut self.board, target, &mut self.rng) else {
            return ItemOutcome::Inert;
        };

        self.inventory.consume(item);
        if self.armed == Some(item) {
            self.armed = None;
        }
        self.events.push_back(SessionEvent::ItemUsed {
            item,
            remaining: self.inventory.count(item),
        });

        match &effect {
            ItemEffect::Cleared(resolution) => {
                self.hint = None;
                self.apply_resolution(resolution);
            }
            ItemEffect::TimeAdded(secs) => {
                self.time_remaining = self.time_remaining.saturating_add(*secs);
                self.events.push_back(SessionEvent::Time {
                    delta: *secs as i32,
                    remaining: self.time_remaining,
                });
            }
            ItemEffect::Shuffled => {
                self.hint = None;
                self.selected = None;
                self.events.push_back(SessionEvent::Shuffled);
            }
            ItemEffect::Hint(hint) => {
                self.hint = *hint;
                self.events.push_back(SessionEvent::Hint(*hint));
            }
        }
        debug!(
            "[Session] used {} ({} left)",
            item.as_str(),
            self.inventory.count(item)
        );

        ItemOutcome::Fired(effect)
    }

    /// One second of game time. Returns the result when this tick ends the game.
    pub fn tick(&mut self) -> Option<SessionResult> {
        if !self.running {
            return None;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.events.push_back(SessionEvent::Time {
            delta: -1,
            remaining: self.time_remaining,
        });
        if self.time_remaining == 0 {
            return Some(self.end());
        }
        None
    }

    /// Stop the game. Calling it again returns the same result.
    pub fn end(&mut self) -> SessionResult {
        if let Some(result) = self.result {
            return result;
        }

        let target = self.config.target_score;
        let won = self.score >= target;
        let result = SessionResult {
            final_score: self.score,
            target_score: target,
            won,
            stars: star_rating(self.score, target),
            level: self.config.level,
        };

        self.running = false;
        self.selected = None;
        self.armed = None;
        self.result = Some(result);
        self.events.push_back(SessionEvent::Ended(result));
        info!(
            "[Session] end score={} target={} won={} stars={} moves={} best_chain={}",
            result.final_score, target, won, result.stars, self.moves, self.best_chain
        );
        result
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill `out` from the current state, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.flash.clear();
        out.score = self.score;
        out.target_score = self.config.target_score;
        out.time_remaining = self.time_remaining;
        out.time_limit = self.config.time_limit;
        out.level = self.config.level;
        out.selected = self.selected;
        out.armed = self.armed;
        out.hint = self.hint;
        out.inventory = self.inventory;
        out.running = self.running;
        out.processing = self.is_processing();
        out.result = self.result;
        out.seed = self.rng.seed();
        out.moves = self.moves;
        out.best_chain = self.best_chain;
    }
}
