// sanitext/src/main.rs
//! SaniText entry point.
//!
//! Parses the command line, sets up logging and the theme, loads the options
//! file and dispatches to the selected subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::process::ExitCode;

use sanitext::cli::{Cli, Commands};
use sanitext::commands::{self, detect::run_detect, sanitize::run_sanitize};
use sanitext::logger;
use sanitext::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use sanitext_core::{merge_options, SanitizeOptions};

fn load_base_options(cli: &Cli) -> Result<SanitizeOptions> {
    match &cli.config {
        Some(path) => SanitizeOptions::load_from_file(path)
            .with_context(|| format!("Failed to load options from {}", path.display())),
        None => SanitizeOptions::discover().context("Failed to load options"),
    }
}

async fn run(cli: Cli, theme_map: &ThemeMap) -> Result<ExitCode> {
    let base = load_base_options(&cli)?;
    debug!("Base options: {:?}", base);

    match &cli.command {
        Commands::Detect(cmd) => {
            let options = merge_options(base, cmd.policy.to_options());
            run_detect(cmd, options, theme_map)
        }
        Commands::Sanitize(cmd) => {
            let options = merge_options(base, cmd.to_options());
            run_sanitize(cmd, options, theme_map, cli.quiet).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    let theme_map = match build_theme_map(cli.theme.as_ref()) {
        Ok(map) => map,
        Err(e) => {
            let fallback = ThemeStyle::default_theme_map();
            commands::error_msg(format!("{:#}", e), &fallback);
            return ExitCode::FAILURE;
        }
    };

    match run(cli, &theme_map).await {
        Ok(code) => code,
        Err(e) => {
            commands::error_msg(format!("{:#}", e), &theme_map);
            ExitCode::FAILURE
        }
    }
}
