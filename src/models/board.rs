use serde::{Deserialize, Serialize};

/// One of the two competing sides. Blue always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Red => write!(f, "red"),
            Side::Blue => write!(f, "blue"),
        }
    }
}

/// Who owns a tile. Lock state is tracked separately on the tile,
/// so "locked" is never a third ownership value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    Neutral,
    Red,
    Blue,
}

impl Owner {
    /// The side holding this tile, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Owner::Neutral => None,
            Owner::Red => Some(Side::Red),
            Owner::Blue => Some(Side::Blue),
        }
    }
}

impl From<Side> for Owner {
    fn from(side: Side) -> Self {
        match side {
            Side::Red => Owner::Red,
            Side::Blue => Owner::Blue,
        }
    }
}

/// One cell of the board. The letter is fixed for the whole game;
/// owner and lock state change only through the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tile {
    pub letter: char,
    pub owner: Owner,
    pub locked: bool,
}

impl Tile {
    /// Whether this tile resists recoloring. A locked Neutral tile is
    /// indistinguishable from plain Neutral: only owned tiles defend.
    pub fn is_protected(&self) -> bool {
        self.locked && self.owner != Owner::Neutral
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A dictionary word together with the tile sequence that spells it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayableWord {
    pub word: String,
    pub positions: Vec<Position>,
}
