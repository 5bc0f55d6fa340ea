//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Animal, Cell, ItemKind, Pos};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const ANIMAL_COLORS: [Rgb; 6] = [
    Rgb::new(230, 160, 90),  // dog
    Rgb::new(240, 220, 80),  // cat
    Rgb::new(240, 240, 240), // rabbit
    Rgb::new(150, 100, 60),  // bear
    Rgb::new(120, 200, 120), // panda
    Rgb::new(230, 90, 60),   // fox
];

/// A lightweight terminal renderer for the match-3 board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell keeps the board roughly square.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board for a `size x size` grid
    pub fn frame_size(&self, size: usize) -> (u16, u16) {
        let size = size as u16;
        (size * self.cell_w + 2, size + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `cursor` is the keyboard cursor, drawn on top of everything else.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<Pos>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let size = snap.board.size();
        let (frame_w, frame_h) = self.frame_size(size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = if snap.armed.is_some() {
            CellStyle::new(Rgb::new(255, 120, 120), PANEL_BG).bold()
        } else {
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG)
        };
        fb.draw_box(start_x, start_y, frame_w, frame_h, border);

        for pos in snap.board.positions() {
            let cell = snap.board.get(pos).unwrap_or_default();
            self.draw_cell(fb, snap, cursor, start_x, start_y, pos, cell);
        }

        self.draw_side_panel(fb, snap, viewport, start_x.saturating_add(frame_w), start_y);

        if let Some(result) = snap.result {
            let headline = if result.won { "STAGE CLEAR" } else { "TIME UP" };
            let mid = start_y.saturating_add(frame_h / 2);
            let banner = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
            fb.put_centered(start_x, frame_w, mid.saturating_sub(1), headline, banner);
            let stars = star_text(result.stars);
            fb.put_centered(start_x, frame_w, mid, &stars, banner);
            let hint = CellStyle::new(Rgb::new(180, 180, 180), PANEL_BG);
            let keys = if result.won && result.level.is_some() {
                "r retry  n next"
            } else {
                "r retry  q quit"
            };
            fb.put_centered(start_x, frame_w, mid.saturating_add(1), keys, hint);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: Option<Pos>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        cursor: Option<Pos>,
        start_x: u16,
        start_y: u16,
        pos: Pos,
        cell: Cell,
    ) {
        let px = start_x + 1 + pos.col as u16 * self.cell_w;
        let py = start_y + 1 + pos.row as u16;

        let (ch, mut style) = if snap.is_flashing(pos) {
            ('*', CellStyle::new(Rgb::new(255, 255, 120), BOARD_BG).bold())
        } else {
            match cell {
                Cell::Empty => ('·', CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim()),
                Cell::Obstacle => ('▓', CellStyle::new(Rgb::new(120, 120, 130), BOARD_BG)),
                Cell::Animal(animal) => (animal.letter(), animal_style(animal)),
            }
        };

        let hinted = snap.hint.is_some_and(|h| h.from == pos || h.to == pos);
        if snap.selected == Some(pos) {
            style = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)).bold();
        } else if hinted {
            style = style.with_bg(Rgb::new(110, 40, 120));
        }
        if cursor == Some(pos) && snap.running {
            style = style.reverse();
        }

        fb.put_char(px, py, ch, style);
        let pad = if ch == '▓' { '▓' } else { ' ' };
        for dx in 1..self.cell_w {
            fb.put_char(px + dx, py, pad, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let mut y = start_y;
        match snap.level {
            Some(level) => {
                let end = fb.put_str(panel_x, y, "LEVEL ", label);
                fb.put_u32(end, y, level, value);
            }
            None => {
                fb.put_str(panel_x, y, "CLASSIC", label);
            }
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        let end = fb.put_u32(panel_x, y, snap.score, value);
        let end = fb.put_str(end, y, " / ", dim);
        fb.put_u32(end, y, snap.target_score, dim);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        let time_style = if snap.time_remaining <= 10 {
            CellStyle::new(Rgb::new(255, 90, 90), PANEL_BG).bold()
        } else {
            value
        };
        let end = fb.put_u32(panel_x, y, snap.time_remaining, time_style);
        fb.put_char(end, y, 's', time_style);
        y = y.saturating_add(2);

        if snap.best_chain > 1 {
            let end = fb.put_str(panel_x, y, "COMBO x", label);
            fb.put_u32(end, y, snap.best_chain, value);
            y = y.saturating_add(2);
        }

        if snap.inventory.is_empty() && snap.armed.is_none() {
            return;
        }
        fb.put_str(panel_x, y, "ITEMS", label);
        y = y.saturating_add(1);
        for (i, item) in ItemKind::ALL.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            let count = snap.inventory.count(*item);
            let style = if snap.armed == Some(*item) {
                CellStyle::new(Rgb::new(255, 120, 120), PANEL_BG).bold()
            } else if count == 0 {
                dim
            } else {
                value
            };
            let marker = if snap.armed == Some(*item) { '>' } else { ' ' };
            fb.put_char(panel_x, y, marker, style);
            let end = fb.put_u32(panel_x + 1, y, i as u32 + 1, style);
            let end = fb.put_str(end + 1, y, item_label(*item), style);
            let end = fb.put_str(end, y, " x", style);
            fb.put_u32(end, y, count, style);
            y = y.saturating_add(1);
        }
    }
}

fn animal_style(animal: Animal) -> CellStyle {
    let fg = ANIMAL_COLORS
        .get(animal.index())
        .copied()
        .unwrap_or(Rgb::new(220, 220, 220));
    CellStyle::new(fg, BOARD_BG).bold()
}

fn item_label(item: ItemKind) -> &'static str {
    match item {
        ItemKind::Bomb => "Bomb",
        ItemKind::Lightning => "Lightning",
        ItemKind::Rainbow => "Rainbow",
        ItemKind::Time => "Time",
        ItemKind::Shuffle => "Shuffle",
        ItemKind::Hint => "Hint",
    }
}

fn star_text(stars: u8) -> String {
    (0..3)
        .map(|i| if i < stars { '★' } else { '☆' })
        .collect()
}
