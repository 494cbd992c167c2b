use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Side;

/// Summary of a finished game, suitable for logging or writing out as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub game_id: Uuid,
    pub winner: Side,
    pub red_tiles: usize,
    pub blue_tiles: usize,
    /// Words in the order they were successfully played
    pub words_played: Vec<String>,
    /// True when the game ended because the loser submitted an illegal move
    pub forfeit: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}
