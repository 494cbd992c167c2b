use std::collections::HashSet;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::game::{Board, BOARD_SIZE};
use crate::models::{Position, Side};
use crate::players::Player;

/// Interactive player reading moves from stdin. Prompts and the board
/// render go to stdout; only *unparseable* input is re-asked here -- a
/// parseable move is submitted as-is, and its legality is the engine's
/// call alone.
pub struct HumanPlayer {
    lines: Lines<BufReader<Stdin>>,
}

impl HumanPlayer {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Parse a move written as whitespace-separated `row,col` pairs,
    /// e.g. `0,1 0,0`. Coordinates must be on the board.
    fn parse_positions(input: &str) -> Option<Vec<Position>> {
        let mut positions = Vec::new();
        for token in input.split_whitespace() {
            let (row, col) = token.split_once(',')?;
            let row: usize = row.trim().parse().ok()?;
            let col: usize = col.trim().parse().ok()?;
            if row >= BOARD_SIZE || col >= BOARD_SIZE {
                return None;
            }
            positions.push(Position { row, col });
        }

        if positions.is_empty() {
            None
        } else {
            Some(positions)
        }
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Player for HumanPlayer {
    async fn provide_move(
        &mut self,
        board: &Board,
        used_words: &HashSet<String>,
        turn: Side,
    ) -> Vec<Position> {
        println!("{} to move:", turn);
        println!("{}", board);
        if !used_words.is_empty() {
            let mut played: Vec<&str> = used_words.iter().map(String::as_str).collect();
            played.sort_unstable();
            println!("Already played: {}", played.join(", "));
        }

        loop {
            println!("Enter your move as row,col pairs (e.g. `0,1 0,0`):");
            match self.lines.next_line().await {
                Ok(Some(line)) => {
                    if let Some(positions) = Self::parse_positions(&line) {
                        return positions;
                    }
                    println!("Could not read that move, try again.");
                }
                // Stdin is gone; an empty move forfeits and ends the game
                Ok(None) | Err(_) => return Vec::new(),
            }
        }
    }
}
