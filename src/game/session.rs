use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dictionary::Dictionary;
use crate::game::board::{Board, EngineError, BOARD_SIZE};
use crate::game::locks::LockResolver;
use crate::game::validator::MoveValidator;
use crate::game::words::WordIndex;
use crate::models::{MatchReport, PlayableWord, Position, Side};
use crate::players::Player;

/// What became of one submitted move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The word was legal and its tiles have been claimed
    Played { word: String, winner: Option<Side> },
    /// The word was illegal; the mover loses on the spot
    Forfeit { word: String, winner: Side },
}

/// One running game: the board, the fixed playable pool, the words played
/// so far and whose turn it is. All state is owned here; independent
/// sessions only share the read-only dictionary.
pub struct GameSession {
    game_id: Uuid,
    board: Board,
    validator: MoveValidator,
    playable: Arc<Vec<PlayableWord>>,
    used_words: HashSet<String>,
    /// Same words as `used_words`, in play order, for the final report
    transcript: Vec<String>,
    turn: Side,
    verbose: bool,
    started_at: DateTime<Utc>,
}

impl GameSession {
    /// Set up a game on the given letters. The playable pool is computed
    /// here, once, and stays fixed for the session's lifetime.
    pub fn new(
        letters: [[char; BOARD_SIZE]; BOARD_SIZE],
        dictionary: Arc<Dictionary>,
        verbose: bool,
    ) -> Self {
        let board = Board::new(letters);
        let playable = Arc::new(WordIndex::compute(&board, &dictionary));

        if verbose {
            tracing::info!("Board letters:\n{}", board.letters_display());
        }

        Self {
            game_id: Uuid::new_v4(),
            board,
            validator: MoveValidator::new(dictionary),
            playable,
            used_words: HashSet::new(),
            transcript: Vec::new(),
            // Blue always moves first
            turn: Side::Blue,
            verbose,
            started_at: Utc::now(),
        }
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }

    /// Shared handle to the fixed playable pool
    pub fn playable_words(&self) -> Arc<Vec<PlayableWord>> {
        Arc::clone(&self.playable)
    }

    /// Current verdict; `None` while the game is still on. Idempotent on
    /// unchanged state.
    pub fn winner(&self) -> Option<Side> {
        Referee::winner(&self.board, self.used_words.len(), self.playable.len())
    }

    /// Apply one move for the side in turn. The turn passes on every
    /// attempt, legal or not; an illegal word forfeits the game to the
    /// opponent. Only an out-of-range coordinate is an error.
    pub fn play_word(&mut self, positions: &[Position]) -> Result<MoveOutcome, EngineError> {
        let mover = self.turn;
        let word = self.board.word_at(positions)?;

        if !self.validator.is_playable(&word, &self.used_words) {
            self.turn = mover.opponent();
            tracing::info!(
                "player {} made an illegal move ({:?}), and so loses",
                mover,
                word
            );
            return Ok(MoveOutcome::Forfeit {
                word,
                winner: mover.opponent(),
            });
        }

        self.used_words.insert(word.clone());
        self.transcript.push(word.clone());
        self.board.recolor(positions, mover)?;
        LockResolver::apply(&mut self.board);
        self.turn = mover.opponent();

        if self.verbose {
            tracing::info!("player {} played {:?}\n{}", mover, word, self.board);
        }

        Ok(MoveOutcome::Played {
            word,
            winner: self.winner(),
        })
    }

    /// Drive a full game to its end. The call into the player in turn is
    /// the engine's only suspension point; nothing else runs while a move
    /// is pending, and nobody is ever re-prompted.
    pub async fn run(
        &mut self,
        red: &mut dyn Player,
        blue: &mut dyn Player,
    ) -> Result<MatchReport, EngineError> {
        loop {
            // Covers the degenerate zero-word pool as well
            if let Some(winner) = self.winner() {
                return Ok(self.report(winner, false));
            }

            let mover = self.turn;
            let positions = match mover {
                Side::Red => red.provide_move(&self.board, &self.used_words, mover).await,
                Side::Blue => blue.provide_move(&self.board, &self.used_words, mover).await,
            };

            match self.play_word(&positions)? {
                MoveOutcome::Forfeit { winner, .. } => return Ok(self.report(winner, true)),
                MoveOutcome::Played {
                    winner: Some(winner),
                    ..
                } => return Ok(self.report(winner, false)),
                MoveOutcome::Played { winner: None, .. } => {}
            }
        }
    }

    fn report(&self, winner: Side, forfeit: bool) -> MatchReport {
        let (red_tiles, blue_tiles) = self.board.owner_counts();
        MatchReport {
            game_id: self.game_id,
            winner,
            red_tiles,
            blue_tiles,
            words_played: self.transcript.clone(),
            forfeit,
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }
}

/// End-of-game arithmetic
pub struct Referee;

impl Referee {
    /// The game ends when the whole board is owned or the playable pool
    /// is spent. Red wins on strictly more tiles; every tie, including
    /// 0-0, goes to Blue.
    pub fn winner(board: &Board, used_count: usize, pool_size: usize) -> Option<Side> {
        let (red, blue) = board.owner_counts();
        let board_full = red + blue == BOARD_SIZE * BOARD_SIZE;
        let pool_spent = used_count == pool_size;

        if board_full || pool_spent {
            if red > blue {
                Some(Side::Red)
            } else {
                Some(Side::Blue)
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::generator::BoardGenerator;
    use crate::models::Owner;
    use crate::players::FirstWordBot;

    fn pos(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    fn session(words: &[&str]) -> GameSession {
        let dict = Arc::new(Dictionary::from_words(words.iter().copied()));
        GameSession::new(BoardGenerator::easy(), dict, false)
    }

    #[test]
    fn test_single_word_game_blue_wins() {
        // Pool = {"ba"}; Blue opens with it, exhausting the pool
        let mut s = session(&["ba"]);
        assert_eq!(s.turn(), Side::Blue);

        let outcome = s.play_word(&[pos(0, 1), pos(0, 0)]).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Played {
                word: "ba".to_string(),
                winner: Some(Side::Blue),
            }
        );
        assert_eq!(s.board().owner_counts(), (0, 2));
        assert!(s.used_words().contains("ba"));
    }

    #[test]
    fn test_unknown_word_forfeits_to_opponent() {
        let mut s = session(&["ba"]);

        // (0,2) spells "c", which no dictionary here knows
        let outcome = s.play_word(&[pos(0, 2)]).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Forfeit {
                word: "c".to_string(),
                winner: Side::Red,
            }
        );
        // Nothing was claimed and nothing was recorded
        assert_eq!(s.board().owner_counts(), (0, 0));
        assert!(s.used_words().is_empty());
    }

    #[test]
    fn test_reused_word_forfeits() {
        let mut s = session(&["ba", "ad"]);

        s.play_word(&[pos(0, 1), pos(0, 0)]).unwrap();
        assert_eq!(s.turn(), Side::Red);

        // Red replays Blue's word
        let outcome = s.play_word(&[pos(0, 1), pos(0, 0)]).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Forfeit {
                word: "ba".to_string(),
                winner: Side::Blue,
            }
        );
    }

    #[test]
    fn test_turn_flips_on_every_attempt() {
        let mut s = session(&["ba", "ad"]);
        assert_eq!(s.turn(), Side::Blue);

        s.play_word(&[pos(0, 1), pos(0, 0)]).unwrap();
        assert_eq!(s.turn(), Side::Red);

        // Illegal attempt flips the turn too
        s.play_word(&[pos(0, 2)]).unwrap();
        assert_eq!(s.turn(), Side::Blue);
    }

    #[test]
    fn test_out_of_range_move_is_an_error_not_a_forfeit() {
        let mut s = session(&["ba"]);
        let err = s.play_word(&[pos(7, 0)]).unwrap_err();
        assert_eq!(err, EngineError::OutOfBounds { row: 7, col: 0 });
        // A precondition violation is not a move attempt
        assert_eq!(s.turn(), Side::Blue);
    }

    #[test]
    fn test_full_board_ends_the_game() {
        // The whole alphabet-board as one 25-letter word
        let everything = "abcdefghijklmnopqrstuvwxy";
        let mut s = session(&[everything, "ba"]);

        let all: Vec<Position> = Board::positions().collect();
        let outcome = s.play_word(&all).unwrap();
        match outcome {
            MoveOutcome::Played { winner, .. } => assert_eq!(winner, Some(Side::Blue)),
            other => panic!("expected a played move, got {:?}", other),
        }
        assert_eq!(s.board().owner_counts(), (0, 25));
        // Pool was not exhausted; the full board alone ended it
        assert!(s.used_words().len() < 2);
    }

    #[test]
    fn test_winner_is_idempotent() {
        let mut s = session(&["ba"]);
        s.play_word(&[pos(0, 1), pos(0, 0)]).unwrap();
        assert_eq!(s.winner(), Some(Side::Blue));
        assert_eq!(s.winner(), Some(Side::Blue));
    }

    #[test]
    fn test_referee_resolves_ties_to_blue() {
        let mut board = Board::new(BoardGenerator::easy());
        board.recolor(&[pos(0, 0)], Side::Red).unwrap();
        board.recolor(&[pos(4, 4)], Side::Blue).unwrap();

        // Pool spent, one tile each
        assert_eq!(Referee::winner(&board, 1, 1), Some(Side::Blue));

        // 0-0 on a spent pool is also Blue's
        let empty = Board::new(BoardGenerator::easy());
        assert_eq!(Referee::winner(&empty, 0, 0), Some(Side::Blue));
    }

    #[test]
    fn test_referee_red_wins_on_more_tiles() {
        let mut board = Board::new(BoardGenerator::easy());
        board.recolor(&[pos(0, 0), pos(0, 1)], Side::Red).unwrap();
        board.recolor(&[pos(4, 4)], Side::Blue).unwrap();
        assert_eq!(Referee::winner(&board, 1, 1), Some(Side::Red));
    }

    #[test]
    fn test_referee_reports_no_winner_mid_game() {
        let mut board = Board::new(BoardGenerator::easy());
        board.recolor(&[pos(0, 0)], Side::Blue).unwrap();
        assert_eq!(Referee::winner(&board, 1, 3), None);
    }

    #[test]
    fn test_locks_recompute_after_each_play() {
        // "ab" claims (0,0) and (0,1); neither can lock while bordering
        // neutral tiles
        let mut s = session(&["ab", "ba"]);
        s.play_word(&[pos(0, 0), pos(0, 1)]).unwrap();
        assert_eq!(s.board().is_locked(pos(0, 0)), Some(false));
        assert_eq!(s.board().owner_at(pos(0, 0)), Some(Owner::Blue));
    }

    #[test]
    fn test_bot_game_runs_to_completion() {
        tokio_test::block_on(async {
            let mut s = session(&["ba", "ad", "cab"]);
            let mut red = FirstWordBot::new(s.playable_words());
            let mut blue = FirstWordBot::new(s.playable_words());

            let report = s.run(&mut red, &mut blue).await.unwrap();
            assert!(!report.forfeit);
            assert_eq!(report.words_played.len(), 3);
            assert_eq!(report.winner, Side::Blue);
        });
    }

    #[test]
    fn test_empty_pool_ends_immediately_as_blue_win() {
        tokio_test::block_on(async {
            let mut s = session(&[]);
            let mut red = FirstWordBot::new(s.playable_words());
            let mut blue = FirstWordBot::new(s.playable_words());

            let report = s.run(&mut red, &mut blue).await.unwrap();
            assert_eq!(report.winner, Side::Blue);
            assert!(report.words_played.is_empty());
            assert_eq!((report.red_tiles, report.blue_tiles), (0, 0));
        });
    }
}
