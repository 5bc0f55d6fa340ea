//! Board cursor for keyboard play.
//!
//! Terminals have no pointer, so a cursor stands in for the mouse: movement
//! actions move it (clamped to the board) and everything else becomes a
//! [`Command`] for the session, with `Select` carrying the cursor position.

use crate::types::{Direction, InputAction, ItemKind, Pos};

/// Session-facing command produced from an input action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Pos),
    UseItem(ItemKind),
    Restart,
    NextLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Pos,
    size: usize,
}

impl Cursor {
    /// Cursor at the top-left cell of a `size x size` board
    pub fn new(size: usize) -> Self {
        Self {
            pos: Pos::new(0, 0),
            size: size.max(1),
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Adapt to a new board size, keeping the cursor inside it
    pub fn resize(&mut self, size: usize) {
        self.size = size.max(1);
        self.pos = Pos::new(self.pos.row.min(self.size - 1), self.pos.col.min(self.size - 1));
    }

    /// Move one cell. Returns false at the edge.
    pub fn step(&mut self, direction: Direction) -> bool {
        match self.pos.step(direction) {
            Some(next) if next.row < self.size && next.col < self.size => {
                self.pos = next;
                true
            }
            _ => false,
        }
    }

    /// Apply an action: cursor moves are consumed here, the rest become commands
    pub fn handle(&mut self, action: InputAction) -> Option<Command> {
        match action {
            InputAction::CursorUp => {
                self.step(Direction::Up);
                None
            }
            InputAction::CursorDown => {
                self.step(Direction::Down);
                None
            }
            InputAction::CursorLeft => {
                self.step(Direction::Left);
                None
            }
            InputAction::CursorRight => {
                self.step(Direction::Right);
                None
            }
            InputAction::Select => Some(Command::Select(self.pos)),
            InputAction::UseItem(item) => Some(Command::UseItem(item)),
            InputAction::Restart => Some(Command::Restart),
            InputAction::NextLevel => Some(Command::NextLevel),
        }
    }
}
