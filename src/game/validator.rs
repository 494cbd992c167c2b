use std::collections::HashSet;
use std::sync::Arc;

use crate::dictionary::Dictionary;

/// Decides whether a spelled word may be played. Legality is purely a
/// property of the word: dictionary membership and prior use. Where the
/// word's coordinates came from is not this module's business.
pub struct MoveValidator {
    dictionary: Arc<Dictionary>,
}

impl MoveValidator {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    /// A word is playable iff the dictionary knows it and it has not
    /// already been played this game. No minimum length.
    pub fn is_playable(&self, word: &str, used_words: &HashSet<String>) -> bool {
        self.dictionary.contains(word) && !used_words.contains(word)
    }
}
