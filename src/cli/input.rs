//! Where command text comes from and where results go

use anyhow::{Context, Result};
use caesar::io::{read_stdin, read_text, write_text};
use std::path::{Path, PathBuf};

/// One piece of text to process, with a label for reports and logs
#[derive(Debug, Clone)]
pub struct Input {
    pub source: String,
    pub path: Option<PathBuf>,
    pub text: String,
}

/// Collect inputs: a positional argument, else files, else stdin.
pub fn collect(text: Option<String>, files: &[PathBuf], trim: bool) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();

    if let Some(text) = text {
        inputs.push(Input {
            source: "<argument>".to_string(),
            path: None,
            text,
        });
    } else if !files.is_empty() {
        for path in files {
            let text =
                read_text(path).with_context(|| format!("Unable to load {}", path.display()))?;
            inputs.push(Input {
                source: path.display().to_string(),
                path: Some(path.clone()),
                text,
            });
        }
    } else {
        let text = read_stdin().context("Unable to read standard input")?;
        inputs.push(Input {
            source: "<stdin>".to_string(),
            path: None,
            text,
        });
    }

    if trim {
        for input in &mut inputs {
            input.text = input.text.trim().to_string();
        }
    }
    Ok(inputs)
}

/// Collect exactly one input
pub fn collect_one(text: Option<String>, file: Option<&Path>, trim: bool) -> Result<Input> {
    let files: Vec<PathBuf> = file.map(Path::to_path_buf).into_iter().collect();
    collect(text, &files, trim)?
        .pop()
        .context("No input text")
}

/// Write to `output` if given, otherwise print to stdout.
pub fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            write_text(path, content)
                .with_context(|| format!("Unable to save {}", path.display()))?;
            tracing::info!("Result saved: {}", path.display());
        }
        None => {
            if content.ends_with('\n') {
                print!("{}", content);
            } else {
                println!("{}", content);
            }
        }
    }
    Ok(())
}
