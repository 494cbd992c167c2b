use once_cell::sync::Lazy;

/// Vowels available to the balanced board fill
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Consonants available to the balanced board fill. q is left out and
/// handled separately, it only earns its tile next to a u or an i.
pub const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't', 'v', 'w', 'x', 'y',
    'z',
];

/// Letter frequency distribution for English (approximate)
/// Used for weighted random generation
pub static LETTER_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    vec![
        ('e', 12.70),
        ('t', 9.05),
        ('a', 8.16),
        ('o', 7.50),
        ('i', 6.96),
        ('n', 6.74),
        ('s', 6.32),
        ('h', 6.09),
        ('r', 5.98),
        ('d', 4.25),
        ('l', 4.02),
        ('c', 2.78),
        ('u', 2.75),
        ('m', 2.40),
        ('w', 2.36),
        ('f', 2.22),
        ('g', 2.01),
        ('y', 1.97),
        ('p', 1.92),
        ('b', 1.49),
        ('v', 0.97),
        ('k', 0.77),
        ('j', 0.15),
        ('x', 0.15),
        ('q', 0.09),
        ('z', 0.07),
    ]
});

/// Calculate the cumulative distribution for weighted random selection
pub fn get_cumulative_distribution() -> Vec<(char, f32)> {
    let mut cumulative = 0.0;
    LETTER_DISTRIBUTION
        .iter()
        .map(|(ch, freq)| {
            cumulative += freq;
            (*ch, cumulative)
        })
        .collect()
}
