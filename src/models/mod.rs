pub mod board;
pub mod report;

pub use board::{Owner, PlayableWord, Position, Side, Tile};
pub use report::MatchReport;
