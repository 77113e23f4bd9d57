//! Automatic shift detection
//!
//! [`analyze`] decodes the input with every shift from 0 to 25, scores each
//! result with [`frequency::english_score`] and keeps all 26 candidates so
//! callers can show alternatives. The best candidate is the first one with
//! the strictly highest score, so the lowest shift wins ties.
//!
//! A text with no letters produces 26 candidates scoring 0 and shift 0 as
//! "best". That is a successful result with no signal; check
//! [`Analysis::is_degenerate`] before trusting it.

pub mod frequency;
pub mod stats;

pub use frequency::{english_score, LetterDistribution, REFERENCE_FREQUENCIES};
pub use stats::{LetterCount, TextStatistics};

use crate::cipher::{transform, DecodeOptions, ALPHABET_LEN};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of distinct shifts
pub const SHIFT_COUNT: usize = ALPHABET_LEN as usize;

/// One evaluated shift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftCandidate {
    /// Shift removed to decode, 0..26
    pub shift: u8,
    /// Plausibility, higher is more English-like; 0 means no letters
    pub score: f64,
    pub decoded_text: String,
}

/// Result of [`analyze`]: every candidate in shift order plus the best one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    candidates: Vec<ShiftCandidate>,
    best: usize,
}

impl Analysis {
    /// All 26 candidates, ordered by shift
    pub fn candidates(&self) -> &[ShiftCandidate] {
        &self.candidates
    }

    pub fn best(&self) -> &ShiftCandidate {
        &self.candidates[self.best]
    }

    /// True when the input had no letters and no shift carries any signal
    pub fn is_degenerate(&self) -> bool {
        self.best().score == 0.0
    }

    /// Candidates by descending score; equal scores keep shift order
    pub fn ranked(&self) -> Vec<&ShiftCandidate> {
        let mut ranked: Vec<&ShiftCandidate> = self.candidates.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// The `n` most plausible candidates
    pub fn top(&self, n: usize) -> Vec<&ShiftCandidate> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

/// Score all 26 shifts of `text` and pick the most English-like one.
pub fn analyze(text: &str) -> Analysis {
    let options = DecodeOptions::analysis();
    let mut candidates = Vec::with_capacity(SHIFT_COUNT);
    let mut best = 0;
    let mut best_score = 0.0;

    for shift in 0..SHIFT_COUNT as u8 {
        let decoded_text = transform(text, -i64::from(shift), &options);
        let score = english_score(&decoded_text);
        if score > best_score {
            best_score = score;
            best = candidates.len();
        }
        candidates.push(ShiftCandidate {
            shift,
            score,
            decoded_text,
        });
    }

    debug!(
        "Analyzed {} chars: best shift {} (score {:.2})",
        text.chars().count(),
        candidates[best].shift,
        best_score
    );

    Analysis { candidates, best }
}

/// Outcome of [`auto_decode`]
#[derive(Debug, Clone, PartialEq)]
pub struct AutoDecode {
    pub analysis: Analysis,
    /// Shift removed to produce `output`
    pub shift: u8,
    /// Input decoded with the caller's options
    pub output: String,
}

/// Detect the shift and decode `text` with the caller's `options`.
///
/// The analysis previews always keep whitespace; `output` honours
/// `options.preserve_whitespace`.
pub fn auto_decode(text: &str, options: &DecodeOptions) -> AutoDecode {
    let analysis = analyze(text);
    let shift = analysis.best().shift;
    let output = if options.preserve_whitespace {
        analysis.best().decoded_text.clone()
    } else {
        transform(text, -i64::from(shift), options)
    };
    AutoDecode {
        analysis,
        shift,
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = "The quick brown FOX jumps over the lazy dog while the farmer watches from the porch.";
    const CIPHER: &str = "Wkh txlfn eurzq IRA mxpsv ryhu wkh odcb grj zkloh wkh iduphu zdwfkhv iurp wkh srufk.";

    #[test]
    fn test_detects_shift_three() {
        let analysis = analyze(CIPHER);
        assert_eq!(analysis.best().shift, 3);
        assert!(analysis.best().decoded_text.starts_with("The quick brown FOX"));
        assert_eq!(analysis.best().decoded_text, PLAIN);
        assert!(!analysis.is_degenerate());
    }

    #[test]
    fn test_plaintext_is_shift_zero() {
        assert_eq!(analyze(PLAIN).best().shift, 0);
    }

    #[test]
    fn test_returns_all_candidates_in_order() {
        let analysis = analyze(CIPHER);
        assert_eq!(analysis.candidates().len(), SHIFT_COUNT);
        for (i, c) in analysis.candidates().iter().enumerate() {
            assert_eq!(c.shift as usize, i);
            assert_eq!(c.decoded_text, transform(CIPHER, -(i as i64), &DecodeOptions::default()));
        }
    }

    #[test]
    fn test_best_has_maximum_score() {
        let analysis = analyze(CIPHER);
        let max = analysis
            .candidates()
            .iter()
            .map(|c| c.score)
            .fold(f64::MIN, f64::max);
        assert_eq!(analysis.best().score, max);
        assert_eq!(analysis.ranked()[0].shift, 3);
    }

    #[test]
    fn test_degenerate_input() {
        for text in ["12345 !!!", "", "   \n\t"] {
            let analysis = analyze(text);
            assert!(analysis.is_degenerate());
            assert_eq!(analysis.best().shift, 0);
            assert_eq!(analysis.candidates().len(), SHIFT_COUNT);
            assert!(analysis.candidates().iter().all(|c| c.score == 0.0));
            assert!(analysis.candidates().iter().all(|c| c.decoded_text == text));
        }
    }

    #[test]
    fn test_ranking_keeps_shift_order_on_ties() {
        let analysis = analyze("!!!");
        let shifts: Vec<u8> = analysis.ranked().iter().map(|c| c.shift).collect();
        assert_eq!(shifts, (0..26).collect::<Vec<u8>>());
        assert_eq!(analysis.top(5).len(), 5);
        assert_eq!(analysis.top(100).len(), 26);
    }

    #[test]
    fn test_lowest_shift_wins_ties() {
        // "ab" and "ba" style texts score identically for several shifts;
        // whichever ties, the reported best must be the first maximum.
        let analysis = analyze("ab");
        let max = analysis.best().score;
        let first = analysis
            .candidates()
            .iter()
            .position(|c| c.score == max)
            .unwrap();
        assert_eq!(analysis.best().shift as usize, first);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        assert_eq!(analyze(CIPHER), analyze(CIPHER));
    }

    #[test]
    fn test_auto_decode_drops_whitespace_on_request() {
        let opts = DecodeOptions {
            preserve_case: true,
            preserve_whitespace: false,
        };
        let result = auto_decode(CIPHER, &opts);
        assert_eq!(result.shift, 3);
        assert!(result.output.starts_with("ThequickbrownFOX"));
        // analysis previews still keep spaces
        assert!(result.analysis.best().decoded_text.starts_with("The quick"));
    }

    #[test]
    fn test_auto_decode_default_options() {
        let result = auto_decode(CIPHER, &DecodeOptions::default());
        assert_eq!(result.output, PLAIN);
    }
}
