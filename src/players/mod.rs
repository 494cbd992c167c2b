use std::collections::HashSet;

use async_trait::async_trait;

use crate::game::Board;
use crate::models::{Position, Side};

pub mod bot;
pub mod human;

pub use bot::FirstWordBot;
pub use human::HumanPlayer;

/// The engine's decision boundary. An implementation may take as long as
/// it likes (a human thinking, an external computation); the engine does
/// nothing while a move is pending. The returned move may be illegal --
/// the engine never re-prompts, an illegal move forfeits the game.
#[async_trait]
pub trait Player: Send {
    async fn provide_move(
        &mut self,
        board: &Board,
        used_words: &HashSet<String>,
        turn: Side,
    ) -> Vec<Position>;
}
