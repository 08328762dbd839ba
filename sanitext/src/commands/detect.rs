// sanitext/src/commands/detect.rs
//! The `detect` subcommand: report disallowed characters, change nothing.

use anyhow::Result;
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};
use std::process::ExitCode;

use sanitext_core::{SanitizeOptions, Sanitizer};

use crate::cli::DetectCommand;
use crate::ui::detection_report;
use crate::ui::theme::ThemeMap;
use crate::utils::input::{read_input, InputSource};

pub fn run_detect(cmd: &DetectCommand, options: SanitizeOptions, theme_map: &ThemeMap) -> Result<ExitCode> {
    let source = InputSource::from_args(&cmd.input);
    let text = read_input(&source, cmd.input.raw_bytes)?;
    let sanitizer = Sanitizer::new(options);

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    let found = if cmd.json {
        let detections = sanitizer.detect(&text);
        detection_report::print_json(&detections, &mut writer)?;
        detections.len()
    } else {
        let summary = sanitizer.summarize(&text);
        if cmd.verbose {
            detection_report::print_verbose(&summary, &mut writer, theme_map, supports_color)?;
        } else {
            detection_report::print_plain(&summary, &mut writer, theme_map, supports_color)?;
        }
        summary.iter().map(|item| item.occurrences).sum()
    };
    writer.flush()?;
    info!("Detection finished: {} suspicious characters.", found);

    if cmd.fail_on_detect && found > 0 {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
