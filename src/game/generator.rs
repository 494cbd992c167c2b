use rand::Rng;

use crate::game::board::BOARD_SIZE;
use crate::utils::letters::{get_cumulative_distribution, CONSONANTS, VOWELS};

type Letters = [[char; BOARD_SIZE]; BOARD_SIZE];

pub struct BoardGenerator;

impl BoardGenerator {
    /// Deterministic fill: row-major a..y. Handy for tests and for
    /// stepping through a game by hand.
    pub fn easy() -> Letters {
        let mut letters = [['a'; BOARD_SIZE]; BOARD_SIZE];
        for (i, row) in letters.iter_mut().enumerate() {
            for (j, letter) in row.iter_mut().enumerate() {
                *letter = (b'a' + (BOARD_SIZE * i + j) as u8) as char;
            }
        }
        letters
    }

    /// Random fill with English letter frequency weighting
    pub fn random() -> Letters {
        let mut rng = rand::rng();
        let cumulative_dist = get_cumulative_distribution();
        let total = cumulative_dist.last().unwrap().1;

        let mut letters = [['a'; BOARD_SIZE]; BOARD_SIZE];
        for row in letters.iter_mut() {
            for letter in row.iter_mut() {
                *letter = Self::random_letter(&cumulative_dist, total, &mut rng);
            }
        }
        letters
    }

    /// Random fill biased toward playable boards: 3 to 6 vowels, a chance
    /// of a q when a u or an i made it in, consonants for the rest, all
    /// dealt onto the grid in random order.
    pub fn balanced() -> Letters {
        let mut rng = rand::rng();
        let mut pool: Vec<char> = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);

        let vowel_count = rng.random_range(3..=6);
        for _ in 0..vowel_count {
            pool.push(VOWELS[rng.random_range(0..VOWELS.len())]);
        }

        if (pool.contains(&'u') || pool.contains(&'i')) && rng.random_range(0..3) == 0 {
            pool.push('q');
        }

        while pool.len() < BOARD_SIZE * BOARD_SIZE {
            pool.push(CONSONANTS[rng.random_range(0..CONSONANTS.len())]);
        }

        let mut letters = [['a'; BOARD_SIZE]; BOARD_SIZE];
        for row in letters.iter_mut() {
            for letter in row.iter_mut() {
                let idx = rng.random_range(0..pool.len());
                *letter = pool.swap_remove(idx);
            }
        }
        letters
    }

    fn random_letter(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * total;

        for (letter, cumulative) in cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'e' // Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_fill_is_row_major_alphabet() {
        let letters = BoardGenerator::easy();
        assert_eq!(letters[0][0], 'a');
        assert_eq!(letters[0][1], 'b');
        assert_eq!(letters[1][0], 'f');
        assert_eq!(letters[4][4], 'y');
    }

    #[test]
    fn test_random_fill_is_lowercase_alphabetic() {
        let letters = BoardGenerator::random();
        assert!(letters
            .iter()
            .flatten()
            .all(|c| c.is_ascii_lowercase() && c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_balanced_fill_vowel_count_in_range() {
        for _ in 0..50 {
            let letters = BoardGenerator::balanced();
            let vowels = letters
                .iter()
                .flatten()
                .filter(|c| VOWELS.contains(c))
                .count();
            // A q never displaces a vowel, and the u in VOWELS can only be
            // drawn as a vowel, so the vowel count is exactly the dealt 3..=6
            assert!((3..=6).contains(&vowels), "vowel count {} out of range", vowels);
        }
    }
}
