use std::collections::HashMap;

use crate::dictionary::Dictionary;
use crate::game::board::Board;
use crate::models::{PlayableWord, Position};

/// Enumerates every word the board can spell. Computed once per game:
/// the pool is a property of the letter arrangement and the dictionary
/// alone, and is never refreshed as ownership changes.
pub struct WordIndex;

impl WordIndex {
    /// One entry per distinct spellable dictionary word. A word is
    /// spellable when every occurrence of a letter can be assigned its
    /// own tile bearing that letter. Output order is deterministic.
    pub fn compute(board: &Board, dictionary: &Dictionary) -> Vec<PlayableWord> {
        let mut buckets: HashMap<char, Vec<Position>> = HashMap::new();
        for (pos, tile) in board.tiles() {
            buckets.entry(tile.letter).or_default().push(pos);
        }

        let mut candidates: Vec<&str> = dictionary.words().collect();
        candidates.sort_unstable();

        let mut pool = Vec::new();
        'candidates: for word in candidates {
            let mut taken: HashMap<char, usize> = HashMap::new();
            let mut positions = Vec::with_capacity(word.len());

            for ch in word.chars() {
                let Some(bucket) = buckets.get(&ch) else {
                    continue 'candidates;
                };
                let next = taken.entry(ch).or_insert(0);
                match bucket.get(*next) {
                    Some(&pos) => {
                        positions.push(pos);
                        *next += 1;
                    }
                    // More copies of this letter than the board holds
                    None => continue 'candidates,
                }
            }

            pool.push(PlayableWord {
                word: word.to_string(),
                positions,
            });
        }

        tracing::info!("{} playable words on this board", pool.len());
        pool
    }
}
