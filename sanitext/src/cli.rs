//! This file defines the command-line interface (CLI) for the sanitext application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use sanitext_core::{DecisionOrder, SanitizeOptions};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "sanitext",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip or normalize invisible, confusable and unexpected Unicode from text",
    long_about = "SaniText filters text against an allowlist of acceptable characters (printable ASCII plus newline, tab and carriage return, optionally emoji and any characters you name). It reports what falls outside the list and replaces each offending character with its closest safe equivalent, or lets you decide character by character.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Path to an options file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "SANITEXT_CONFIG", global = true, help = "Path to an options file (YAML).")]
    pub config: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `sanitext` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lists the characters that fall outside the allowed set without changing anything.
    #[command(about = "Lists suspicious characters without changing the input.")]
    Detect(DetectCommand),

    /// Writes the input with every disallowed character resolved.
    #[command(about = "Replaces or removes suspicious characters.")]
    Sanitize(SanitizeCommand),
}

/// Where the text comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Read input from the system clipboard.
    #[arg(long = "from-clipboard", conflicts_with = "input_file", help = "Read input from the system clipboard.")]
    pub from_clipboard: bool,

    /// Treat every input byte as the character with the same code point.
    #[arg(long = "raw-bytes", help = "Map each input byte to the code point of the same value instead of decoding UTF-8.")]
    pub raw_bytes: bool,
}

/// Which characters are acceptable.
#[derive(Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// Accept single-codepoint emoji.
    #[arg(long = "allow-emoji", help = "Accept single-codepoint emoji.")]
    pub allow_emoji: bool,

    /// Additional characters to accept.
    #[arg(long = "allow-chars", value_name = "CHARS", default_value = "", help = "Additional characters to accept, given as one string.")]
    pub allow_chars: String,
}

/// Arguments for the `detect` command.
#[derive(Parser, Debug)]
pub struct DetectCommand {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Show a table with code points and occurrence counts.
    #[arg(long, short = 'v', help = "Show a detailed table with code points and occurrence counts.")]
    pub verbose: bool,

    /// Print the detections as JSON.
    #[arg(long = "json", conflicts_with = "verbose", help = "Print every detection as JSON to stdout.")]
    pub json: bool,

    /// Exit with a non-zero code if anything was detected.
    #[arg(long = "fail-on-detect", help = "Exit with status 1 if any suspicious character is found.")]
    pub fail_on_detect: bool,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Copy sanitized output to the system clipboard.
    #[arg(long, short = 'c', help = "Copy sanitized output to the system clipboard.")]
    pub clipboard: bool,

    /// Decide each suspicious character at a prompt.
    #[arg(long, short = 'I', help = "Decide each suspicious character at a prompt (keep, remove, replace or cancel).")]
    pub interactive: bool,

    /// Order of interactive prompts.
    #[arg(long = "decision-order", value_name = "ORDER", value_parser = parse_decision_order, help = "Order of interactive prompts: 'code-point' (default) or 'utf16'.")]
    pub decision_order: Option<DecisionOrder>,

    /// Print the detection report before sanitizing.
    #[arg(long, short = 'v', help = "Print a detailed detection report to stderr before sanitizing.")]
    pub verbose: bool,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Suppress the summary line.
    #[arg(long = "no-summary", help = "Suppress the summary printed after sanitizing.")]
    pub no_summary: bool,
}

fn parse_decision_order(s: &str) -> Result<DecisionOrder, String> {
    s.parse::<DecisionOrder>().map_err(|e| e.to_string())
}

impl PolicyArgs {
    /// The options these flags describe, before merging with an options file.
    pub fn to_options(&self) -> SanitizeOptions {
        SanitizeOptions {
            allow_emoji: self.allow_emoji,
            allow_chars: self.allow_chars.clone(),
            ..Default::default()
        }
    }
}

impl SanitizeCommand {
    pub fn to_options(&self) -> SanitizeOptions {
        SanitizeOptions {
            interactive: self.interactive,
            decision_order: self.decision_order,
            ..self.policy.to_options()
        }
    }
}
