//! Character-class statistics of an input text

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// How many letters `TextStatistics::collect` keeps in `top_letters`
pub const TOP_LETTERS: usize = 10;

static DECIMAL_DIGIT: OnceLock<Regex> = OnceLock::new();

/// Unicode decimal digits (`Nd`); fractions and other numerics don't count
fn decimal_digit() -> &'static Regex {
    DECIMAL_DIGIT.get_or_init(|| Regex::new(r"\p{Nd}").expect("valid regex"))
}

/// Count and share of one letter in the input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterCount {
    pub letter: char,
    pub count: usize,
    /// Percentage of all letters in the text
    pub percentage: f64,
}

/// Summary counts for the "text statistics" section of a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Length in characters (not bytes)
    pub total_chars: usize,
    pub letters: usize,
    /// Plain spaces only; tabs and newlines are counted as punctuation
    pub spaces: usize,
    pub digits: usize,
    /// Everything that is not a letter, space or digit
    pub punctuation: usize,
    /// Most frequent letters, case-folded, highest count first
    pub top_letters: Vec<LetterCount>,
}

impl TextStatistics {
    pub fn collect(text: &str) -> Self {
        let mut stats = TextStatistics::default();
        // (letter, count) in first-seen order so ties keep that order
        let mut seen: Vec<(char, usize)> = Vec::new();

        for c in text.chars() {
            stats.total_chars += 1;
            if c.is_alphabetic() {
                stats.letters += 1;
                for lower in c.to_lowercase().filter(|l| l.is_alphabetic()) {
                    match seen.iter_mut().find(|(l, _)| *l == lower) {
                        Some((_, n)) => *n += 1,
                        None => seen.push((lower, 1)),
                    }
                }
            } else if c == ' ' {
                stats.spaces += 1;
            }
        }
        stats.digits = decimal_digit().find_iter(text).count();
        stats.punctuation = stats.total_chars - stats.letters - stats.spaces - stats.digits;

        // stable sort: equal counts stay in first-seen order
        seen.sort_by(|a, b| b.1.cmp(&a.1));
        let total: usize = seen.iter().map(|(_, n)| n).sum();
        stats.top_letters = seen
            .into_iter()
            .take(TOP_LETTERS)
            .map(|(letter, count)| LetterCount {
                letter,
                count,
                percentage: count as f64 / total as f64 * 100.0,
            })
            .collect();

        stats
    }
}
