use anipang::core::{find_hint, has_match, Hint};
use anipang::engine::{Campaign, GameConfig, GameMode, Progress};
use anipang::types::{InputAction, ItemKind, Pos, REJECT_PAUSE_MS, ROUND_PAUSE_MS};
use anipang::App;

fn app_in(mode: GameMode, seed: u64) -> App {
    let config = GameConfig {
        seed: Some(seed),
        mode,
        ..GameConfig::default()
    };
    App::with_campaign(config, Campaign::new(Progress::default()))
}

fn app(seed: u64) -> App {
    app_in(GameMode::Classic, seed)
}

/// First seed whose opening board has a matching swap
fn hinted_app(mode: GameMode) -> (App, Hint) {
    (0..50)
        .find_map(|seed| {
            let a = app_in(mode, seed);
            let hint = find_hint(a.session().board())?;
            Some((a, hint))
        })
        .expect("no opening board with a matching swap")
}

fn swap(app: &mut App, from: Pos, to: Pos) {
    move_cursor(app, from);
    app.handle_action(InputAction::Select);
    move_cursor(app, to);
    app.handle_action(InputAction::Select);
}

fn move_cursor(app: &mut App, to: Pos) {
    while app.cursor().row < to.row {
        app.handle_action(InputAction::CursorDown);
    }
    while app.cursor().row > to.row {
        app.handle_action(InputAction::CursorUp);
    }
    while app.cursor().col < to.col {
        app.handle_action(InputAction::CursorRight);
    }
    while app.cursor().col > to.col {
        app.handle_action(InputAction::CursorLeft);
    }
    assert_eq!(app.cursor(), to);
}

#[test]
fn swap_replays_rounds_then_settles() {
    let (mut a, hint) = hinted_app(GameMode::Classic);

    swap(&mut a, hint.from, hint.to);
    assert!(a.session().score() > 0);
    assert!(a.is_replaying());

    a.update(0);
    let flashing = a.snapshot();
    assert!(!flashing.flash.is_empty());
    assert_ne!(&flashing.board, a.session().board());

    for _ in 0..100 {
        if !a.is_replaying() {
            break;
        }
        a.update(ROUND_PAUSE_MS);
    }
    assert!(!a.is_replaying());
    let settled = a.snapshot();
    assert!(settled.flash.is_empty());
    assert_eq!(&settled.board, a.session().board());
}

#[test]
fn cursor_stays_on_the_board() {
    let mut a = app(3);
    for _ in 0..20 {
        a.handle_action(InputAction::CursorUp);
        a.handle_action(InputAction::CursorLeft);
    }
    assert_eq!(a.cursor(), Pos::new(0, 0));
    for _ in 0..20 {
        a.handle_action(InputAction::CursorDown);
        a.handle_action(InputAction::CursorRight);
    }
    assert_eq!(a.cursor(), Pos::new(7, 7));
}

#[test]
fn input_is_ignored_during_the_last_round_flash() {
    let (mut a, hint) = hinted_app(GameMode::Levels);
    swap(&mut a, hint.from, hint.to);

    a.update(0);
    while a.session().is_processing() {
        a.update(ROUND_PAUSE_MS);
    }
    // Every round is delivered but the last one is still on screen
    assert!(a.is_replaying());
    assert!(!a.snapshot().flash.is_empty());

    let score = a.session().score();
    move_cursor(&mut a, Pos::new(4, 4));
    a.handle_action(InputAction::Select);
    a.handle_action(InputAction::UseItem(ItemKind::Bomb));
    a.handle_action(InputAction::UseItem(ItemKind::Time));
    assert_eq!(a.session().selected(), None);
    assert_eq!(a.session().armed(), None);
    assert_eq!(a.session().inventory().count(ItemKind::Time), 3);
    assert_eq!(a.session().score(), score);

    a.update(ROUND_PAUSE_MS);
    assert!(!a.is_replaying());
    a.handle_action(InputAction::Select);
    assert_eq!(a.session().selected(), Some(Pos::new(4, 4)));
}

#[test]
fn rejected_swap_is_shown_then_reverted() {
    let mut a = app(4);
    let board = a.session().board().clone();
    let (from, to) = board
        .positions()
        .filter(|p| p.col + 1 < board.size())
        .map(|p| (p, Pos::new(p.row, p.col + 1)))
        .find(|&(from, to)| {
            let mut scratch = board.clone();
            scratch.swap(from, to);
            !has_match(&scratch)
        })
        .expect("every horizontal swap matches");

    swap(&mut a, from, to);
    assert_eq!(a.session().board(), &board);

    a.update(0);
    assert!(a.is_replaying());
    let mut swapped = board.clone();
    swapped.swap(from, to);
    let shown = a.snapshot();
    assert_eq!(shown.board, swapped);
    assert!(shown.flash.is_empty());

    a.update(REJECT_PAUSE_MS);
    assert!(!a.is_replaying());
    assert_eq!(a.snapshot().board, board);
    assert_eq!(a.session().score(), 0);
}
