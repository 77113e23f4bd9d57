//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisReport, CandidatePreview};
use anyhow::Result;
use console::style;

const RULE: &str = "──────────────────────────────────────";

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "\n{} {}\n",
        style("Caesar Analysis").bold(),
        style(&report.source).dim()
    ));
    out.push_str(&format!("{}\n", style(RULE).dim()));

    if report.degenerate {
        out.push_str(&format!(
            "{}\n\n",
            style("No letters found: no shift can be inferred.").yellow()
        ));
    } else {
        out.push_str(&format!(
            "Best shift: {}  Score: {}\n\n",
            style(format!("-{}", report.best_shift)).green().bold(),
            style(format!("{:.2}", report.best_score)).bold()
        ));
        out.push_str(&format!("{}\n", style("DECODED").bold()));
        out.push_str(&indent(&report.decoded_text));
        out.push_str("\n\n");
    }

    // Ranked candidates
    if !report.ranked.is_empty() && !report.degenerate {
        out.push_str(&format!(
            "{}\n",
            style(format!("TOP {} SHIFTS", report.ranked.len())).bold()
        ));
        for (i, candidate) in report.ranked.iter().enumerate() {
            out.push_str(&format!(
                "  #{:<2} Shift: -{:>2} | Score: {:>6.2}\n",
                i + 1,
                candidate.shift,
                candidate.score
            ));
            out.push_str(&format!(
                "      {}\n",
                style(preview_line(candidate, "...")).dim()
            ));
        }
        out.push('\n');
    }

    render_statistics(report, &mut out);

    if !report.all_shifts.is_empty() {
        out.push_str(&format!("{}\n", style("ALL SHIFTS").bold()));
        for candidate in &report.all_shifts {
            out.push_str(&format!(
                "  Shift -{:>2} (Score: {:>6.2}):\n",
                candidate.shift, candidate.score
            ));
            out.push_str(&format!("  {}\n", style(RULE).dim()));
            out.push_str(&format!("  {}\n\n", preview_line(candidate, "... [truncated]")));
        }
    }

    Ok(out)
}

fn render_statistics(report: &AnalysisReport, out: &mut String) {
    let stats = &report.statistics;
    out.push_str(&format!("{}\n", style("TEXT STATISTICS").bold()));
    out.push_str(&format!("  Total length: {} characters\n", stats.total_chars));
    out.push_str(&format!("  Letters: {}\n", stats.letters));

    if stats.letters > 0 {
        out.push_str(&format!(
            "  Spaces: {}  Digits: {}  Punctuation: {}\n",
            stats.spaces, stats.digits, stats.punctuation
        ));
        out.push_str(&format!(
            "\n  Letter frequencies (top {}):\n",
            stats.top_letters.len()
        ));
        for entry in &stats.top_letters {
            out.push_str(&format!(
                "    {}: {:>3} ({:>5.2}%)\n",
                entry.letter.to_uppercase(),
                entry.count,
                entry.percentage
            ));
        }
    }
    out.push('\n');
}

fn preview_line(candidate: &CandidatePreview, ellipsis: &str) -> String {
    if candidate.truncated {
        format!("{}{}", candidate.preview, ellipsis)
    } else {
        candidate.preview.clone()
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
