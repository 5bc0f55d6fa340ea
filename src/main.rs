//! Terminal Anipang runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! Configuration comes from `ANIPANG_*` environment variables; logs go to
//! `ANIPANG_LOG_PATH` when set (the terminal itself is in raw mode).

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use anipang::core::GameSnapshot;
use anipang::engine::GameConfig;
use anipang::input::{handle_key_event, should_quit};
use anipang::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use anipang::types::TICK_MS;
use anipang::App;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;
    info!("[Main] starting with {:?}", config);

    let mut app = App::new(config);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = GameView::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.snapshot_into(&mut snap);
        view.render_into(&snap, Some(app.cursor()), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.handle_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            app.update(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
