use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::game::Board;
use crate::models::{PlayableWord, Position, Side};
use crate::players::Player;

/// The simplest possible automated player: walk the shared playable pool
/// in order and submit the first word nobody has played yet.
pub struct FirstWordBot {
    playable: Arc<Vec<PlayableWord>>,
}

impl FirstWordBot {
    pub fn new(playable: Arc<Vec<PlayableWord>>) -> Self {
        Self { playable }
    }
}

#[async_trait]
impl Player for FirstWordBot {
    async fn provide_move(
        &mut self,
        _board: &Board,
        used_words: &HashSet<String>,
        turn: Side,
    ) -> Vec<Position> {
        for entry in self.playable.iter() {
            if !used_words.contains(&entry.word) {
                tracing::debug!("bot ({}) picks {:?}", turn, entry.word);
                return entry.positions.clone();
            }
        }

        // A drained pool ends the game before the bot is asked again; an
        // empty move here would simply forfeit
        Vec::new()
    }
}
