//! `caesar crack`: detect the shift and output the plaintext
//!
//! Several inputs are analyzed in parallel with rayon; results are
//! reported in input order.

use super::input::{collect, emit, Input};
use anyhow::{bail, Result};
use caesar::{auto_decode, AutoDecode, DecodeOptions};
use console::style;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct CrackArgs {
    pub text: Option<String>,
    pub inputs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub show_shift: bool,
    pub options: DecodeOptions,
    pub trim: bool,
}

pub fn run(args: CrackArgs) -> Result<()> {
    let inputs = collect(args.text, &args.inputs, args.trim)?;
    if inputs.len() > 1 && args.output.is_some() {
        bail!("--output takes a single input; use --out-dir for {} files", inputs.len());
    }

    let targets = match &args.out_dir {
        Some(dir) => Some(plan_outputs(dir, &inputs)?),
        None => None,
    };

    info!("Auto-decoding {} input(s)", inputs.len());
    let results = crack_all(&inputs, &args.options);

    let multiple = inputs.len() > 1;
    let mut failed = 0;
    for (idx, (input, result)) in inputs.iter().zip(&results).enumerate() {
        if result.analysis.is_degenerate() {
            warn!("No letters in {}", input.source);
            eprintln!(
                "{} {}: no letters found, cannot infer a shift",
                style("✗").red(),
                input.source
            );
            failed += 1;
            continue;
        }

        if args.show_shift {
            eprintln!(
                "{}: shift -{} (score {:.2})",
                input.source,
                result.shift,
                result.analysis.best().score
            );
        }

        match (&targets, &args.output) {
            (Some(targets), _) => emit(Some(&targets[idx]), &result.output)?,
            (None, Some(path)) => emit(Some(path), &result.output)?,
            (None, None) => {
                if multiple {
                    println!("==> {} <==", input.source);
                }
                emit(None, &result.output)?;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} input(s) could not be decoded", failed, inputs.len());
    }
    Ok(())
}

/// Auto-decode every input; order of results matches `inputs`.
fn crack_all(inputs: &[Input], options: &DecodeOptions) -> Vec<AutoDecode> {
    inputs
        .par_iter()
        .map(|input| auto_decode(&input.text, options))
        .collect()
}

/// `<dir>/<input file name>`, or `<dir>/decoded.txt` for non-file inputs
fn output_path(dir: &Path, input: &Input) -> PathBuf {
    let name = input
        .path
        .as_deref()
        .and_then(Path::file_name)
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "decoded.txt".into());
    dir.join(name)
}

/// Output path for every input, checked before anything is written.
///
/// Fails when two inputs share a file name or an output would replace
/// its own input.
fn plan_outputs(dir: &Path, inputs: &[Input]) -> Result<Vec<PathBuf>> {
    let mut claimed: HashMap<PathBuf, &str> = HashMap::new();
    let mut targets = Vec::with_capacity(inputs.len());

    for input in inputs {
        let target = output_path(dir, input);
        if overwrites_input(dir, input) {
            bail!("Refusing to overwrite input {}", input.source);
        }
        if let Some(previous) = claimed.insert(target.clone(), &input.source) {
            bail!(
                "{} and {} would both be written to {}",
                previous,
                input.source,
                target.display()
            );
        }
        targets.push(target);
    }
    Ok(targets)
}

/// True when writing to `dir` would overwrite the input file itself
fn overwrites_input(dir: &Path, input: &Input) -> bool {
    let Some(path) = &input.path else {
        return false;
    };
    match (
        std::fs::canonicalize(path),
        std::fs::canonicalize(output_path(dir, input)),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(source: &str, text: &str) -> Input {
        Input {
            source: source.into(),
            path: Some(PathBuf::from(source)),
            text: text.into(),
        }
    }

    #[test]
    fn test_crack_all_keeps_order() {
        let inputs = vec![
            input("a.txt", "Khoor, Zruog! Wklv lv d vhfuhw phvvdjh iurp wkh hdvw."),
            input("b.txt", "Uryyb, Jbeyq! Guvf vf n frperg zrffntr sebz gur rnfg."),
            input("c.txt", "12345"),
        ];
        let results = crack_all(&inputs, &DecodeOptions::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].shift, 3);
        assert!(results[0].output.starts_with("Hello, World!"));
        assert_eq!(results[1].shift, 13);
        assert!(results[2].analysis.is_degenerate());
    }

    #[test]
    fn test_output_path_uses_file_name() {
        let i = input("/tmp/in/secret.txt", "x");
        assert_eq!(output_path(Path::new("out"), &i), PathBuf::from("out/secret.txt"));

        let arg = Input {
            source: "<argument>".into(),
            path: None,
            text: "x".into(),
        };
        assert_eq!(output_path(Path::new("out"), &arg), PathBuf::from("out/decoded.txt"));
    }

    #[test]
    fn test_overwrites_input_detection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("msg.txt");
        std::fs::write(&path, "Khoor").unwrap();
        let i = Input {
            source: path.display().to_string(),
            path: Some(path.clone()),
            text: "Khoor".into(),
        };
        assert!(overwrites_input(dir.path(), &i));
        let other = tempfile::tempdir().unwrap();
        assert!(!overwrites_input(other.path(), &i));
        assert!(plan_outputs(dir.path(), &[i]).is_err());
    }

    #[test]
    fn test_plan_outputs_rejects_shared_names() {
        let inputs = vec![input("a/msg.txt", "x"), input("b/msg.txt", "y")];
        let err = plan_outputs(Path::new("plain"), &inputs).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("a/msg.txt"));
        assert!(msg.contains("b/msg.txt"));

        let inputs = vec![input("a/one.txt", "x"), input("b/two.txt", "y")];
        let targets = plan_outputs(Path::new("plain"), &inputs).unwrap();
        assert_eq!(
            targets,
            vec![PathBuf::from("plain/one.txt"), PathBuf::from("plain/two.txt")]
        );
    }
}
