//! Report data model shared by all reporters

use crate::analysis::{Analysis, ShiftCandidate, TextStatistics};
use serde::{Deserialize, Serialize};

/// Preview length for ranked candidates
pub const RANKED_PREVIEW_CHARS: usize = 100;

/// Preview length for the full shift listing
pub const LISTING_PREVIEW_CHARS: usize = 200;

/// What goes into an [`AnalysisReport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Number of ranked candidates to include
    pub top: usize,
    /// Include all 26 shifts in shift order
    pub show_all: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top: crate::config::DEFAULT_TOP,
            show_all: false,
        }
    }
}

/// A candidate with its decoded text cut down for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePreview {
    pub shift: u8,
    pub score: f64,
    pub preview: String,
    /// True when `preview` is shorter than the decoded text
    pub truncated: bool,
}

impl CandidatePreview {
    /// Build a preview of at most `max_chars` characters.
    ///
    /// Newlines are folded into spaces so each preview fits on one line.
    pub fn new(candidate: &ShiftCandidate, max_chars: usize) -> Self {
        let total = candidate.decoded_text.chars().count();
        let preview: String = candidate
            .decoded_text
            .chars()
            .take(max_chars)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        Self {
            shift: candidate.shift,
            score: candidate.score,
            preview,
            truncated: total > max_chars,
        }
    }
}

/// Full analysis of one input, ready to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Where the text came from (file path, "<stdin>", "<argument>")
    pub source: String,
    pub best_shift: u8,
    pub best_score: f64,
    /// Complete decoded text for the best shift
    pub decoded_text: String,
    /// No letters in the input; `best_shift` is meaningless
    pub degenerate: bool,
    pub statistics: TextStatistics,
    /// Highest scoring candidates first
    pub ranked: Vec<CandidatePreview>,
    /// Every shift in shift order, when requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_shifts: Vec<CandidatePreview>,
}

impl AnalysisReport {
    pub fn new(source: &str, text: &str, analysis: &Analysis, options: &ReportOptions) -> Self {
        let best = analysis.best();
        let ranked = analysis
            .top(options.top)
            .into_iter()
            .map(|c| CandidatePreview::new(c, RANKED_PREVIEW_CHARS))
            .collect();
        let all_shifts = if options.show_all {
            analysis
                .candidates()
                .iter()
                .map(|c| CandidatePreview::new(c, LISTING_PREVIEW_CHARS))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            source: source.to_string(),
            best_shift: best.shift,
            best_score: best.score,
            decoded_text: best.decoded_text.clone(),
            degenerate: analysis.is_degenerate(),
            statistics: TextStatistics::collect(text),
            ranked,
            all_shifts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_preview_truncates_and_folds_newlines() {
        let candidate = ShiftCandidate {
            shift: 1,
            score: 2.0,
            decoded_text: "line one\nline two".into(),
        };
        let preview = CandidatePreview::new(&candidate, 10);
        assert_eq!(preview.preview, "line one l");
        assert!(preview.truncated);

        let full = CandidatePreview::new(&candidate, 100);
        assert_eq!(full.preview, "line one line two");
        assert!(!full.truncated);
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let candidate = ShiftCandidate {
            shift: 0,
            score: 0.0,
            decoded_text: "ééé".into(),
        };
        let preview = CandidatePreview::new(&candidate, 2);
        assert_eq!(preview.preview, "éé");
    }

    #[test]
    fn test_report_from_analysis() {
        let text = "Wkh vxq lv vklqlqj dqg wkh elugv duh vlqjlqj lq wkh wuhhv wrgdb";
        let analysis = analyze(text);
        let report = AnalysisReport::new("<argument>", text, &analysis, &ReportOptions::default());
        assert_eq!(report.best_shift, 3);
        assert!(!report.degenerate);
        assert_eq!(report.ranked.len(), 5);
        assert_eq!(report.ranked[0].shift, 3);
        assert!(report.all_shifts.is_empty());
        assert!(report.decoded_text.starts_with("The sun is shining"));
        assert_eq!(report.statistics.total_chars, text.chars().count());
    }

    #[test]
    fn test_report_with_all_shifts() {
        let analysis = analyze("abc");
        let options = ReportOptions {
            top: 3,
            show_all: true,
        };
        let report = AnalysisReport::new("x", "abc", &analysis, &options);
        assert_eq!(report.ranked.len(), 3);
        assert_eq!(report.all_shifts.len(), 26);
        assert_eq!(report.all_shifts[25].shift, 25);
    }
}
