//! Terminal application state.
//!
//! Glue between the pieces: the campaign picks a level, a [`GameSession`] plays
//! it, the cursor turns keys into session commands, and cascade rounds are
//! replayed with a short flash before the board settles. Everything here is
//! driven by `update(elapsed_ms)` so it runs the same under a real clock and
//! in tests.

use std::path::PathBuf;

use log::{info, warn};

use crate::core::{
    Board, GameRng, GameSession, GameSnapshot, SessionConfig, SessionEvent, SessionResult,
};
use crate::engine::{store, Campaign, GameConfig, GameMode, LevelConfig};
use crate::input::{Command, Cursor};
use crate::types::{InputAction, Pos, CLOCK_STEP_MS, REJECT_PAUSE_MS, ROUND_PAUSE_MS};

/// A step being shown: the board before it, and the cells it cleared. A
/// rejected swap is shown as the swapped board with nothing cleared.
#[derive(Debug, Clone)]
struct Flash {
    cleared: Vec<Pos>,
    after: Board,
    remaining_ms: u32,
}

pub struct App {
    config: GameConfig,
    campaign: Campaign,
    session: GameSession,
    cursor: Cursor,
    seeds: GameRng,
    /// Board as last shown to the player while rounds are replayed
    shown: Board,
    flash: Option<Flash>,
    clock_ms: u32,
    progress_path: Option<PathBuf>,
}

impl App {
    /// Build the app, loading progress from `config.progress_path`
    pub fn new(config: GameConfig) -> Self {
        let progress = store::load(&config.progress_path);
        let path = config.progress_path.clone();
        let mut app = Self::with_campaign(config, Campaign::new(progress));
        app.progress_path = Some(path);
        app
    }

    /// Build the app around an existing campaign; progress is not saved.
    pub fn with_campaign(config: GameConfig, mut campaign: Campaign) -> Self {
        let mut seeds = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        if config.mode == GameMode::Levels {
            if let Some(level) = config.start_level {
                if campaign.start_level(level).is_none() {
                    info!(
                        "[App] level {} is locked, resuming at {}",
                        level,
                        campaign.current_level()
                    );
                }
            }
        }

        let first_seed = config.seed.unwrap_or_else(|| seeds.next_seed());
        let session = GameSession::start(level_for(&config, &campaign), first_seed);
        let size = session.board().size();

        Self {
            shown: session.board().clone(),
            session,
            cursor: Cursor::new(size),
            seeds,
            flash: None,
            clock_ms: 0,
            progress_path: None,
            campaign,
            config,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn cursor(&self) -> Pos {
        self.cursor.pos()
    }

    /// True while cascade rounds or a rejected swap are still being shown.
    /// Board clicks and items are ignored meanwhile.
    pub fn is_replaying(&self) -> bool {
        self.flash.is_some() || self.session.is_processing()
    }

    pub fn handle_action(&mut self, action: InputAction) {
        let Some(command) = self.cursor.handle(action) else {
            return;
        };

        match command {
            Command::Select(_) | Command::UseItem(_) if self.is_replaying() => {}
            Command::Select(pos) => {
                self.shown = self.session.board().clone();
                self.session.select(pos);
            }
            Command::UseItem(item) => {
                self.shown = self.session.board().clone();
                self.session.activate_item(item, None);
            }
            Command::Restart => self.restart(),
            Command::NextLevel => self.next_level(),
        }
    }

    /// Advance wall-clock time: the session clock and the round replay
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.session.is_running() {
            self.clock_ms += elapsed_ms;
            while self.clock_ms >= CLOCK_STEP_MS {
                self.clock_ms -= CLOCK_STEP_MS;
                if let Some(result) = self.session.tick() {
                    self.finish(result);
                    break;
                }
            }
        }

        self.advance_replay(elapsed_ms);
    }

    fn advance_replay(&mut self, elapsed_ms: u32) {
        if let Some(flash) = self.flash.as_mut() {
            if flash.remaining_ms > elapsed_ms {
                flash.remaining_ms -= elapsed_ms;
                return;
            }
            if let Some(done) = self.flash.take() {
                self.shown = done.after;
            }
        }

        while let Some(event) = self.session.poll_event() {
            match event {
                SessionEvent::Swapped { a, b } => {
                    self.shown.swap(a, b);
                }
                SessionEvent::Round(round) => {
                    self.flash = Some(Flash {
                        cleared: round.cleared,
                        after: round.board,
                        remaining_ms: ROUND_PAUSE_MS,
                    });
                    return;
                }
                SessionEvent::SwapRejected { a, b, .. } => {
                    let after = self.shown.clone();
                    self.shown.swap(a, b);
                    self.flash = Some(Flash {
                        cleared: Vec::new(),
                        after,
                        remaining_ms: REJECT_PAUSE_MS,
                    });
                    return;
                }
                _ => {}
            }
        }
    }

    fn finish(&mut self, result: SessionResult) {
        if !self.campaign.commit(&result) {
            return;
        }
        if let Some(path) = &self.progress_path {
            if let Err(e) = store::save(path, self.campaign.progress()) {
                warn!("[App] failed to save progress: {:#}", e);
            }
        }
    }

    fn restart(&mut self) {
        let level = level_for(&self.config, &self.campaign);
        self.start_session(level);
    }

    fn next_level(&mut self) {
        let won = self.session.result().is_some_and(|r| r.won);
        if self.config.mode != GameMode::Levels || !won {
            return;
        }
        let Some(next) = self.campaign.next_level() else {
            return;
        };
        if self.campaign.start_level(next).is_some() {
            self.restart();
        }
    }

    fn start_session(&mut self, config: SessionConfig) {
        let seed = self.seeds.next_seed();
        self.session = GameSession::start(config, seed);
        self.shown = self.session.board().clone();
        self.flash = None;
        self.clock_ms = 0;
        self.cursor.resize(self.session.board().size());
    }

    /// Snapshot for rendering, with the replayed board while rounds are shown
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.session.snapshot_into(out);
        if self.is_replaying() {
            out.board.clone_from(&self.shown);
            if let Some(flash) = &self.flash {
                out.flash.extend_from_slice(&flash.cleared);
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

fn level_for(config: &GameConfig, campaign: &Campaign) -> SessionConfig {
    let level = match config.mode {
        GameMode::Classic => LevelConfig::classic(),
        GameMode::Levels => campaign.level_config(),
    };
    level.session_config(config.board_size, config.kind_count, config.item_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Progress;
    use crate::types::ItemKind;

    fn app(mode: GameMode) -> App {
        let config = GameConfig {
            seed: Some(5),
            mode,
            ..GameConfig::default()
        };
        App::with_campaign(config, Campaign::new(Progress::default()))
    }

    #[test]
    fn test_clock_ticks_once_per_second() {
        let mut a = app(GameMode::Classic);
        a.update(999);
        assert_eq!(a.session().time_remaining(), 60);
        a.update(1);
        assert_eq!(a.session().time_remaining(), 59);
        a.update(2500);
        assert_eq!(a.session().time_remaining(), 57);
    }

    #[test]
    fn test_classic_has_no_items() {
        let a = app(GameMode::Classic);
        assert!(a.session().inventory().is_empty());
        assert_eq!(a.session().config().level, None);
    }

    #[test]
    fn test_levels_start_at_unlocked() {
        let config = GameConfig {
            seed: Some(5),
            start_level: Some(9),
            ..GameConfig::default()
        };
        let a = App::with_campaign(config, Campaign::new(Progress::default()));
        assert_eq!(a.session().config().level, Some(1));
        assert_eq!(a.session().inventory().count(ItemKind::Bomb), 3);
    }

    #[test]
    fn test_game_ends_and_loss_keeps_progress() {
        let mut a = app(GameMode::Levels);
        for _ in 0..60 {
            a.update(CLOCK_STEP_MS);
        }
        assert!(!a.session().is_running());
        assert_eq!(a.campaign().progress(), &Progress::default());
        a.handle_action(InputAction::NextLevel);
        assert_eq!(a.session().config().level, Some(1));
        assert!(!a.session().is_running());
    }

    #[test]
    fn test_restart_starts_fresh_session() {
        let mut a = app(GameMode::Levels);
        a.update(3000);
        a.handle_action(InputAction::Restart);
        assert_eq!(a.session().time_remaining(), 60);
        assert!(a.session().is_running());
    }

    #[test]
    fn test_cursor_select() {
        let mut a = app(GameMode::Classic);
        a.handle_action(InputAction::CursorRight);
        a.handle_action(InputAction::Select);
        assert_eq!(a.session().selected(), Some(Pos::new(0, 1)));
        assert!(!a.is_replaying());
    }
}
