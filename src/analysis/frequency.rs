//! English letter-frequency model and plausibility scoring
//!
//! # Scoring Formula
//!
//! ```text
//! observed(c)  = count(c) / total_letters × 100
//! deviation    = Σ |observed(c) − expected(c)|   over letters present
//! score        = 1000 / (deviation + 1)
//! ```
//!
//! `expected(c)` comes from [`REFERENCE_FREQUENCIES`]; characters missing
//! from the table (accented letters and other non-ASCII alphabetics) use
//! [`FALLBACK_FREQUENCY`]. A text without letters scores 0.

use std::collections::BTreeMap;

/// Expected percentage of each letter in English prose, `a` through `z`.
pub static REFERENCE_FREQUENCIES: [(char, f64); 26] = [
    ('a', 8.2),
    ('b', 1.3),
    ('c', 2.8),
    ('d', 4.3),
    ('e', 12.7),
    ('f', 2.2),
    ('g', 2.0),
    ('h', 6.1),
    ('i', 7.0),
    ('j', 0.15),
    ('k', 0.8),
    ('l', 4.0),
    ('m', 2.4),
    ('n', 6.7),
    ('o', 7.5),
    ('p', 1.9),
    ('q', 0.10),
    ('r', 6.0),
    ('s', 6.3),
    ('t', 9.1),
    ('u', 2.8),
    ('v', 1.0),
    ('w', 2.4),
    ('x', 0.15),
    ('y', 2.0),
    ('z', 0.07),
];

/// Expected percentage for characters absent from the reference table
pub const FALLBACK_FREQUENCY: f64 = 0.01;

/// Numerator of the score; a perfect match scores exactly this
pub const MAX_SCORE: f64 = 1000.0;

/// Expected English frequency (percent) of `letter`, lowercase expected.
pub fn expected_frequency(letter: char) -> f64 {
    if letter.is_ascii_lowercase() {
        REFERENCE_FREQUENCIES[(letter as u8 - b'a') as usize].1
    } else {
        FALLBACK_FREQUENCY
    }
}

/// Observed letter counts of a text, lowercased.
///
/// ASCII letters live in a fixed array and everything else in a BTreeMap,
/// so iteration order (and therefore float summation order) is stable.
#[derive(Debug, Clone, Default)]
pub struct LetterDistribution {
    ascii: [usize; 26],
    other: BTreeMap<char, usize>,
    total: usize,
}

impl LetterDistribution {
    /// Count the alphabetic characters of the lowercased `text`.
    ///
    /// Lowercasing can expand a character (`İ` becomes `i` plus a
    /// combining dot); only the alphabetic parts are counted.
    pub fn from_text(text: &str) -> Self {
        let mut dist = Self::default();
        for lower in text.chars().flat_map(char::to_lowercase) {
            if lower.is_alphabetic() {
                dist.add(lower);
            }
        }
        dist
    }

    fn add(&mut self, letter: char) {
        if letter.is_ascii_lowercase() {
            self.ascii[(letter as u8 - b'a') as usize] += 1;
        } else {
            *self.other.entry(letter).or_insert(0) += 1;
        }
        self.total += 1;
    }

    /// Total number of letters counted
    pub fn total(&self) -> usize {
        self.total
    }

    /// Letters with a non-zero count, in stable order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        let ascii = self
            .ascii
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(i, &n)| (char::from(b'a' + i as u8), n));
        ascii.chain(self.other.iter().map(|(&c, &n)| (c, n)))
    }

    /// Observed percentage of `letter` (0 when absent or no letters)
    pub fn percentage(&self, letter: char) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let count = if letter.is_ascii_lowercase() {
            self.ascii[(letter as u8 - b'a') as usize]
        } else {
            self.other.get(&letter).copied().unwrap_or(0)
        };
        count as f64 / self.total as f64 * 100.0
    }

    /// Sum of absolute differences between observed and expected
    /// percentages, over the letters present.
    pub fn deviation(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.iter()
            .map(|(letter, _)| (self.percentage(letter) - expected_frequency(letter)).abs())
            .sum()
    }

    /// Plausibility score, higher is more English-like
    pub fn score(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        MAX_SCORE / (self.deviation() + 1.0)
    }
}

/// Score a text against the English reference distribution.
pub fn english_score(text: &str) -> f64 {
    LetterDistribution::from_text(text).score()
}
