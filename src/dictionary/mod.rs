use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file: one lowercase word per line.
    /// A game cannot be constructed without a dictionary, so failure
    /// here is fatal to startup.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let words: HashSet<String> = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        tracing::info!("Loaded {} words into dictionary", words.len());

        Ok(Self { words })
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Create a dictionary from an in-memory word list (for testing)
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Iterate over every word in the dictionary
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::empty();
        assert!(dict.is_empty());
        assert!(!dict.contains("test"));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let dict = Dictionary::from_words(["stone"]);
        assert!(dict.contains("stone"));
        assert!(dict.contains("STONE"));
        assert!(!dict.contains("stones"));
    }

    #[test]
    fn test_short_words_are_kept() {
        // No minimum length: two-letter and even one-letter entries count
        let dict = Dictionary::from_words(["a", "ba"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("a"));
        assert!(dict.contains("ba"));
    }
}
