//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Suitable for pasting into issues, pull requests or notes.

use crate::models::{AnalysisReport, CandidatePreview};
use anyhow::Result;
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');

    if !report.degenerate {
        md.push_str(&render_decoded(report));
        md.push('\n');
        md.push_str(&render_ranked(report));
        md.push('\n');
    }

    md.push_str(&render_statistics(report));

    if !report.all_shifts.is_empty() {
        md.push('\n');
        md.push_str(&render_all_shifts(report));
    }

    md.push_str("\n---\n\n*Generated by caesar*\n");
    Ok(md)
}

fn render_header(report: &AnalysisReport) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let verdict = if report.degenerate {
        "**No letters found**: no shift can be inferred.".to_string()
    } else {
        format!(
            "**Best shift: -{}** | **Score: {:.2}**",
            report.best_shift, report.best_score
        )
    };

    format!(
        "# Caesar Analysis: `{}`\n\n{}\n\nGenerated: {}\n",
        report.source, verdict, timestamp
    )
}

fn render_decoded(report: &AnalysisReport) -> String {
    format!("## Decoded Text\n\n```text\n{}\n```\n", report.decoded_text)
}

fn render_ranked(report: &AnalysisReport) -> String {
    let mut md = String::from("## Most Probable Shifts\n\n");
    md.push_str("| Rank | Shift | Score | Preview |\n");
    md.push_str("|------|-------|-------|---------|\n");
    for (i, candidate) in report.ranked.iter().enumerate() {
        md.push_str(&format!(
            "| {} | -{} | {:.2} | {} |\n",
            i + 1,
            candidate.shift,
            candidate.score,
            table_cell(candidate, "...")
        ));
    }
    md
}

fn render_statistics(report: &AnalysisReport) -> String {
    let stats = &report.statistics;
    let mut md = String::from("## Text Statistics\n\n");
    md.push_str("| Metric | Value |\n|--------|-------|\n");
    md.push_str(&format!("| Total length | {} |\n", stats.total_chars));
    md.push_str(&format!("| Letters | {} |\n", stats.letters));
    md.push_str(&format!("| Spaces | {} |\n", stats.spaces));
    md.push_str(&format!("| Digits | {} |\n", stats.digits));
    md.push_str(&format!("| Punctuation | {} |\n", stats.punctuation));

    if !stats.top_letters.is_empty() {
        md.push_str("\n### Letter Frequencies\n\n");
        md.push_str("| Letter | Count | Share |\n|--------|-------|-------|\n");
        for entry in &stats.top_letters {
            md.push_str(&format!(
                "| {} | {} | {:.2}% |\n",
                entry.letter.to_uppercase(),
                entry.count,
                entry.percentage
            ));
        }
    }
    md
}

fn render_all_shifts(report: &AnalysisReport) -> String {
    let mut md = String::from("## All Shifts\n\n");
    md.push_str("| Shift | Score | Preview |\n|-------|-------|---------|\n");
    for candidate in &report.all_shifts {
        md.push_str(&format!(
            "| -{} | {:.2} | {} |\n",
            candidate.shift,
            candidate.score,
            table_cell(candidate, "... [truncated]")
        ));
    }
    md
}

/// Escape a preview so it cannot break the table
fn table_cell(candidate: &CandidatePreview, ellipsis: &str) -> String {
    let mut cell = candidate.preview.replace('|', "\\|").replace('\r', " ");
    if candidate.truncated {
        cell.push_str(ellipsis);
    }
    cell
}
