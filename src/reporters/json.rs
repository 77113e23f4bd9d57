//! JSON reporter
//!
//! Outputs the full AnalysisReport as pretty-printed JSON for piping to jq
//! or other tools.

use crate::models::AnalysisReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{degenerate_report, test_report};

    #[test]
    fn test_json_render_valid() {
        let json_str = render(&test_report()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["best_shift"], 3);
        assert_eq!(parsed["degenerate"], false);
        assert_eq!(parsed["ranked"].as_array().expect("ranked array").len(), 5);
        assert_eq!(parsed["all_shifts"].as_array().expect("all_shifts array").len(), 26);
        assert_eq!(parsed["statistics"]["digits"], 0);
    }

    #[test]
    fn test_json_round_trip() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let back: AnalysisReport = serde_json::from_str(&json_str).expect("parse report");
        assert_eq!(back.best_shift, report.best_shift);
        assert_eq!(back.decoded_text, report.decoded_text);
    }

    #[test]
    fn test_json_degenerate_omits_all_shifts() {
        let json_str = render(&degenerate_report()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["degenerate"], true);
        assert_eq!(parsed["best_score"], 0.0);
        assert!(parsed.get("all_shifts").is_none());
    }
}
