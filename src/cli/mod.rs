//! CLI command definitions and handlers

mod analyze;
mod crack;
mod input;
mod shift;

use anyhow::Result;
use caesar::config::{self, CaesarConfig};
use caesar::DecodeOptions;
use clap::{Args, Parser, Subcommand};
use console::style;
use std::path::{Path, PathBuf};

/// Caesar - decode shift-cipher text by hand or by frequency analysis
#[derive(Parser, Debug)]
#[command(name = "caesar")]
#[command(
    version,
    about = "Decode Caesar-shifted text with a known shift or detect the shift automatically",
    long_about = "caesar applies or removes a Caesar shift, and can find the most likely \
shift of an unknown message by comparing letter frequencies of all 26 candidates \
against English.\n\n\
Text is taken from the TEXT argument, from --input files, or from stdin.",
    after_help = "\
Examples:
  caesar decode -s 3 \"Khoor, Zruog!\"        Decode with a known shift
  caesar encode -s 3 \"Hello, World!\"        Encode a message
  caesar crack -i secret.txt                Detect the shift and print the plaintext
  caesar analyze -i secret.txt --all        Score every shift, show all previews
  caesar analyze -i secret.txt -f json      JSON output for scripting"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Config file (default: ./caesar.toml or ./.caesarrc.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by commands that decode text
#[derive(Args, Debug, Clone, Default)]
pub struct DecodeFlags {
    /// Drop whitespace from the output
    #[arg(long, overrides_with = "keep_whitespace")]
    pub strip_whitespace: bool,

    /// Keep whitespace even when config or CAESAR_PRESERVE_WHITESPACE drops it
    #[arg(long, overrides_with = "strip_whitespace")]
    pub keep_whitespace: bool,

    /// Keep letter case as typed (letters always keep their case)
    #[arg(long)]
    pub preserve_case: bool,
}

impl DecodeFlags {
    /// Config defaults with these flags applied on top
    fn resolve(&self, config: &CaesarConfig) -> DecodeOptions {
        let mut options = config.decode_options();
        if self.strip_whitespace {
            options.preserve_whitespace = false;
        } else if self.keep_whitespace {
            options.preserve_whitespace = true;
        }
        if self.preserve_case {
            options.preserve_case = true;
        }
        options
    }
}

/// Text source and destination for single-input commands
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text to process (default: --input file, or stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read text from a file (UTF-8, invalid bytes replaced)
    #[arg(long, short = 'i', conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Write the result to a file (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode text with a known shift
    #[command(after_help = "\
Examples:
  caesar decode -s 3 \"Khoor, Zruog!\"        Prints: Hello, World!
  caesar decode -s -23 \"Khoor\"              Same as -s 3
  caesar decode -s 3 -i in.txt -o out.txt   File to file")]
    Decode {
        /// Shift that was used to encode (any integer, reduced modulo 26)
        #[arg(long, short = 's', allow_negative_numbers = true)]
        shift: i64,

        #[command(flatten)]
        io: InputArgs,

        #[command(flatten)]
        flags: DecodeFlags,
    },

    /// Encode text with a shift
    Encode {
        /// Shift to apply (any integer, reduced modulo 26)
        #[arg(long, short = 's', allow_negative_numbers = true)]
        shift: i64,

        #[command(flatten)]
        io: InputArgs,

        #[command(flatten)]
        flags: DecodeFlags,
    },

    /// Score all 26 shifts and report the most probable ones
    #[command(after_help = "\
Examples:
  caesar analyze \"Wkh vxq lv vklqlqj\"        Ranked shifts and text statistics
  caesar analyze -i secret.txt --top 3      Only the 3 best shifts
  caesar analyze -i secret.txt --all        Also list every shift
  caesar analyze -i secret.txt -f markdown -o report.md")]
    Analyze {
        #[command(flatten)]
        io: InputArgs,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Number of ranked shifts to show
        #[arg(long)]
        top: Option<usize>,

        /// List every shift with a preview
        #[arg(long)]
        all: bool,
    },

    /// Detect the shift and print the decoded text
    #[command(after_help = "\
Examples:
  caesar crack \"Wkh vxq lv vklqlqj\"          Prints the decoded text
  caesar crack -i a.txt -i b.txt --out-dir plain/   Decode several files in parallel
  caesar crack -i secret.txt --show-shift   Also report the detected shift on stderr")]
    Crack {
        /// Text to decode (default: --input files, or stdin)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read text from files; may be repeated
        #[arg(long, short = 'i', conflicts_with = "text")]
        input: Vec<PathBuf>,

        /// Write the decoded text to a file (single input only)
        #[arg(long, short = 'o', conflicts_with = "out_dir")]
        output: Option<PathBuf>,

        /// Write each decoded file into this directory under its own name
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Print the detected shift and score to stderr
        #[arg(long)]
        show_shift: bool,

        #[command(flatten)]
        flags: DecodeFlags,
    },

    /// Manage configuration (init or show)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create a user config file with example settings
    Init,
    /// Show the effective config and where it came from
    Show,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let config = CaesarConfig::load(cli.config.as_deref(), Path::new("."))?;

    match cli.command {
        Commands::Decode { shift, io, flags } => {
            shift::run(shift::Direction::Decode, shift, &io, &flags.resolve(&config), &config)
        }

        Commands::Encode { shift, io, flags } => {
            shift::run(shift::Direction::Encode, shift, &io, &flags.resolve(&config), &config)
        }

        Commands::Analyze {
            io,
            format,
            top,
            all,
        } => {
            let format = format.unwrap_or_else(|| config.format().to_string());
            let top = top.unwrap_or_else(|| config.top());
            analyze::run(&io, &format, top, all || config.show_all(), &config)
        }

        Commands::Crack {
            text,
            input,
            output,
            out_dir,
            show_shift,
            flags,
        } => crack::run(crack::CrackArgs {
            text,
            inputs: input,
            output,
            out_dir,
            show_shift,
            options: flags.resolve(&config),
            trim: config.trim_input(),
        }),

        Commands::Config { action } => run_config_action(action, &config),
    }
}

fn run_config_action(action: ConfigAction, config: &CaesarConfig) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config::init_user_config()?;
            println!("{} Config initialized at: {}", style("✓").green(), path.display());
            Ok(())
        }
        ConfigAction::Show => {
            show_config(config);
            Ok(())
        }
    }
}

fn show_config(config: &CaesarConfig) {
    println!("{}", style("Config paths:").bold());
    if let Some(user_path) = config::user_config_path() {
        let status = if user_path.exists() { "✓" } else { "(not found)" };
        println!("  User:    {} {}", user_path.display(), status);
    }
    for name in config::PROJECT_CONFIG_FILES {
        let status = if Path::new(name).exists() { "✓" } else { "(not found)" };
        println!("  Project: ./{} {}", name, status);
    }
    if !config.sources().is_empty() {
        println!("  Loaded:");
        for source in config.sources() {
            println!("    {}", source.display());
        }
    }

    let options = config.decode_options();
    println!();
    println!("{}", style("Effective settings:").bold());
    println!("  decode.preserve_case       = {}", options.preserve_case);
    println!("  decode.preserve_whitespace = {}", options.preserve_whitespace);
    println!("  output.format              = {}", config.format());
    println!("  output.top                 = {}", config.top());
    println!("  output.show_all            = {}", config.show_all());
    println!("  output.trim_input          = {}", config.trim_input());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_shift() {
        let cli = Cli::try_parse_from(["caesar", "decode", "-s", "-3", "Khoor"]).unwrap();
        match cli.command {
            Commands::Decode { shift, io, .. } => {
                assert_eq!(shift, -3);
                assert_eq!(io.text.as_deref(), Some("Khoor"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_text_and_input_conflict() {
        let result = Cli::try_parse_from(["caesar", "analyze", "abc", "-i", "file.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_crack_accepts_repeated_inputs() {
        let cli = Cli::try_parse_from(["caesar", "crack", "-i", "a.txt", "-i", "b.txt"]).unwrap();
        match cli.command {
            Commands::Crack { input, .. } => assert_eq!(input.len(), 2),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let config: CaesarConfig =
            toml::from_str("[decode]\npreserve_whitespace = true").unwrap();
        let flags = DecodeFlags {
            strip_whitespace: true,
            preserve_case: true,
            ..Default::default()
        };
        let options = flags.resolve(&config);
        assert!(!options.preserve_whitespace);
        assert!(options.preserve_case);

        let options = DecodeFlags::default().resolve(&config);
        assert!(options.preserve_whitespace);
    }

    #[test]
    fn test_keep_whitespace_beats_config() {
        let config: CaesarConfig =
            toml::from_str("[decode]\npreserve_whitespace = false").unwrap();
        let cli = Cli::try_parse_from(["caesar", "decode", "-s", "1", "--keep-whitespace", "x"])
            .unwrap();
        match cli.command {
            Commands::Decode { flags, .. } => {
                assert!(flags.resolve(&config).preserve_whitespace);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_flags_last_one_wins() {
        let cli = Cli::try_parse_from([
            "caesar",
            "crack",
            "--strip-whitespace",
            "--keep-whitespace",
            "x",
        ])
        .unwrap();
        match cli.command {
            Commands::Crack { flags, .. } => {
                assert!(flags.keep_whitespace);
                assert!(!flags.strip_whitespace);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
