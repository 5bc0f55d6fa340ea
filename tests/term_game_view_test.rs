use anipang::core::{Board, GameSession, Inventory, SessionConfig};
use anipang::term::{AnchorY, FrameBuffer, GameView, Viewport};
use anipang::types::{ItemKind, Pos};

fn text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn session(rows: &[&str], items: Inventory) -> GameSession {
    let config = SessionConfig {
        items,
        level: Some(3),
        ..SessionConfig::default()
    };
    GameSession::from_board(config, Board::from_rows(rows).unwrap(), 1)
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSession::start(SessionConfig::default(), 1).snapshot();
    let view = GameView::default();

    // 8 cells x 2 columns + border => 18 x 10
    let fb = view.render(&snap, None, Viewport::new(18, 10));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(17, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
    assert_eq!(fb.get(17, 9).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_animal_letters_two_columns_wide() {
    let snap = session(&["012", "120", "2#1"], Inventory::empty()).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, None, Viewport::new(8, 5));

    assert_eq!(fb.row_text(1), "│D C R │");
    assert_eq!(fb.row_text(3), "│R ▓▓C │");
}

#[test]
fn term_view_highlights_selection_and_cursor() {
    let mut s = session(&["012", "120", "201"], Inventory::empty());
    s.select(Pos::new(1, 1));
    let snap = s.snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Some(Pos::new(0, 0)), Viewport::new(8, 5));

    let selected = fb.get(3, 2).unwrap();
    assert!(selected.style.bold);
    assert_eq!(selected.style.bg.r, 255);
    assert!(fb.get(1, 1).unwrap().style.reverse);
    assert!(!fb.get(3, 1).unwrap().style.reverse);
}

#[test]
fn term_view_flashes_cleared_cells() {
    let mut snap = session(&["012", "120", "201"], Inventory::empty()).snapshot();
    snap.flash = vec![Pos::new(2, 2)];
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, None, Viewport::new(8, 5));
    assert_eq!(fb.get(5, 3).unwrap().ch, '*');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut s = session(&["012", "120", "201"], Inventory::uniform(2));
    s.activate_item(ItemKind::Bomb, None);
    let snap = s.snapshot();
    let all = text(&GameView::default().render(&snap, None, Viewport::new(60, 24)));

    assert!(all.contains("LEVEL 3"));
    assert!(all.contains("SCORE"));
    assert!(all.contains("TIME"));
    assert!(all.contains(">1 Bomb x2"));
    assert!(all.contains(" 6 Hint x2"));
}

#[test]
fn term_view_shows_result_overlay() {
    let mut s = session(&["01201", "12012", "20120", "01201", "12012"], Inventory::empty());
    s.end();
    let all = text(&GameView::default().render(&s.snapshot(), None, Viewport::new(40, 12)));
    assert!(all.contains("TIME UP"));
    assert!(all.contains("☆☆☆"));
}

#[test]
fn term_view_centers_board_on_tall_viewports() {
    let snap = GameSession::start(SessionConfig::default(), 1).snapshot();
    // Frame is 10 rows tall: start_y = (30 - 10) / 2 = 10
    let fb = GameView::default().render(&snap, None, Viewport::new(18, 30));
    assert_eq!(fb.get(0, 10).unwrap().ch, '┌');
}
