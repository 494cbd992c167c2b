use std::fmt;

use thiserror::Error;

use crate::models::{Owner, Position, Side, Tile};

/// Board edge length. Boards are always square and never resized.
pub const BOARD_SIZE: usize = 5;

/// Hard engine failures. These are precondition violations at the call
/// boundary, not game outcomes: an unknown or reused word is a forfeit,
/// never an `EngineError`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("position ({row}, {col}) is outside the 5x5 board")]
    OutOfBounds { row: usize, col: usize },
}

/// The shared tile grid: one letter per cell, fixed for the whole game,
/// plus the ownership and lock state the two sides fight over.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: [[Tile; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board from a letter fill. Every tile starts Neutral and
    /// unlocked.
    pub fn new(letters: [[char; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let tiles = letters.map(|row| {
            row.map(|letter| Tile {
                letter,
                owner: Owner::Neutral,
                locked: false,
            })
        });
        Self { tiles }
    }

    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.tiles.get(pos.row).and_then(|row| row.get(pos.col))
    }

    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.get(pos).map(|tile| tile.letter)
    }

    pub fn owner_at(&self, pos: Position) -> Option<Owner> {
        self.get(pos).map(|tile| tile.owner)
    }

    pub fn is_locked(&self, pos: Position) -> Option<bool> {
        self.get(pos).map(|tile| tile.locked)
    }

    /// All board positions in row-major order
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }

    /// Every tile with its position, row-major
    pub fn tiles(&self) -> impl Iterator<Item = (Position, &Tile)> {
        Self::positions().map(move |pos| (pos, &self.tiles[pos.row][pos.col]))
    }

    pub(crate) fn set_locked(&mut self, pos: Position, locked: bool) {
        self.tiles[pos.row][pos.col].locked = locked;
    }

    /// Read the word a move spells. The word is defined as whatever the
    /// grid holds at the supplied coordinates, in order; no adjacency,
    /// distinctness, or path shape is checked. An out-of-range coordinate
    /// is a caller bug, not an illegal move.
    pub fn word_at(&self, positions: &[Position]) -> Result<String, EngineError> {
        positions
            .iter()
            .map(|&pos| {
                self.letter_at(pos).ok_or(EngineError::OutOfBounds {
                    row: pos.row,
                    col: pos.col,
                })
            })
            .collect()
    }

    /// Claim the given tiles for `side`. Protected tiles keep their owner
    /// even when targeted.
    pub fn recolor(&mut self, positions: &[Position], side: Side) -> Result<(), EngineError> {
        for &pos in positions {
            let tile = self
                .tiles
                .get_mut(pos.row)
                .and_then(|row| row.get_mut(pos.col))
                .ok_or(EngineError::OutOfBounds {
                    row: pos.row,
                    col: pos.col,
                })?;
            if !tile.is_protected() {
                tile.owner = side.into();
            }
        }
        Ok(())
    }

    /// Count tiles held by each side, locked or not: (red, blue)
    pub fn owner_counts(&self) -> (usize, usize) {
        let mut red = 0;
        let mut blue = 0;
        for (_, tile) in self.tiles() {
            match tile.owner {
                Owner::Red => red += 1,
                Owner::Blue => blue += 1,
                Owner::Neutral => {}
            }
        }
        (red, blue)
    }

    /// The bare letters, one row per line
    pub fn letters_display(&self) -> String {
        let mut out = String::new();
        for row in &self.tiles {
            for tile in row {
                out.push(tile.letter);
                out.push(' ');
            }
            out.pop();
            out.push('\n');
        }
        out
    }
}

/// Blue tiles render as `[x]`, red as `(x)`, neutral bare; a locked
/// tile shows its letter uppercased.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.tiles {
            for tile in row {
                let letter = if tile.locked {
                    tile.letter.to_ascii_uppercase()
                } else {
                    tile.letter
                };
                match tile.owner {
                    Owner::Blue => write!(f, "[{}]", letter)?,
                    Owner::Red => write!(f, "({})", letter)?,
                    Owner::Neutral => write!(f, " {} ", letter)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
