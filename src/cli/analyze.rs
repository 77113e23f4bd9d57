//! `caesar analyze`: ranked shift report for one input

use super::input::{collect_one, emit};
use super::InputArgs;
use anyhow::Result;
use caesar::config::CaesarConfig;
use caesar::models::{AnalysisReport, ReportOptions};
use caesar::{analyze, reporters};
use tracing::{info, warn};

pub fn run(io: &InputArgs, format: &str, top: usize, show_all: bool, config: &CaesarConfig) -> Result<()> {
    let input = collect_one(io.text.clone(), io.input.as_deref(), config.trim_input())?;
    info!("Performing frequency analysis of {}", input.source);

    let analysis = analyze(&input.text);
    if analysis.is_degenerate() {
        warn!("{} contains no letters; every shift scores 0", input.source);
    }

    let report = AnalysisReport::new(
        &input.source,
        &input.text,
        &analysis,
        &ReportOptions { top, show_all },
    );
    let rendered = reporters::report(&report, format)?;
    emit(io.output.as_deref(), &rendered)
}
