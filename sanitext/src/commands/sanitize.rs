// sanitext/src/commands/sanitize.rs
//! The `sanitize` subcommand.
//!
//! Reads the input, optionally prints the detection report, resolves every
//! disallowed character (automatically or at the prompt) and writes the result
//! to stdout, a file or the clipboard. Status messages go to stderr.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Write};

use sanitext_core::{decision_channel, ReplacementSummaryItem, SanitizeOptions, SanitizeOutcome, Sanitizer};

use super::{info_msg, success_msg, warn_msg};
use crate::cli::SanitizeCommand;
use crate::ui::theme::{styled, ThemeEntry, ThemeMap};
use crate::ui::{detection_report, diff_viewer, prompt};
use crate::utils::clipboard::copy_to_clipboard;
use crate::utils::input::{read_input, InputSource};
use crate::utils::platform::eof_key_combo;

pub async fn run_sanitize(
    cmd: &SanitizeCommand,
    options: SanitizeOptions,
    theme_map: &ThemeMap,
    quiet: bool,
) -> Result<()> {
    info!("Starting sanitext sanitize operation.");
    let source = InputSource::from_args(&cmd.input);
    if options.interactive && source == InputSource::Stdin {
        bail!("Interactive mode reads answers from stdin, so the text must come from --input-file or --from-clipboard.");
    }
    let text = read_input(&source, cmd.input.raw_bytes)?;
    let sanitizer = Sanitizer::new(options);

    if cmd.verbose {
        let summary = sanitizer.summarize(&text);
        let stderr_supports_color = io::stderr().is_terminal();
        detection_report::print_verbose(&summary, &mut io::stderr(), theme_map, stderr_supports_color)?;
    }

    let outcome = if sanitizer.options().interactive {
        sanitize_interactively(&sanitizer, &text, theme_map, quiet).await?
    } else {
        sanitizer.sanitize_with_report(&text, None).await
    };

    handle_primary_output(&text, &outcome, cmd, theme_map)?;
    if cmd.clipboard {
        handle_clipboard_output(&outcome.output, theme_map);
    }
    if !cmd.no_summary && !quiet {
        handle_summary(&outcome, theme_map)?;
    }
    Ok(())
}

/// Runs the engine against a prompt on a blocking thread that reads stdin.
async fn sanitize_interactively<'a>(
    sanitizer: &Sanitizer,
    text: &'a str,
    theme_map: &ThemeMap,
    quiet: bool,
) -> Result<SanitizeOutcome<'a>> {
    if !quiet {
        info_msg(
            format!("Answer each prompt below; {} cancels and leaves the text unchanged.", eof_key_combo()),
            theme_map,
        );
    }
    let (mut decider, requests) = decision_channel();
    let allowed = sanitizer.allowed_set().clone();
    let prompt_theme = theme_map.clone();
    let enable_colors = io::stderr().is_terminal();

    let prompt_task = tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        prompt::run_prompt_loop(requests, &allowed, stdin.lock(), io::stderr(), &prompt_theme, enable_colors)
    });

    let outcome = sanitizer.sanitize_with_report(text, Some(&mut decider)).await;
    drop(decider);

    let answered = prompt_task.await.context("The interactive prompt stopped unexpectedly")??;
    debug!("Interactive run answered {} prompts.", answered);
    Ok(outcome)
}

fn handle_primary_output(
    original: &str,
    outcome: &SanitizeOutcome<'_>,
    cmd: &SanitizeCommand,
    theme_map: &ThemeMap,
) -> Result<()> {
    if let Some(path) = &cmd.output {
        info!("Writing sanitized content to file: {}", path.display());
        std::fs::write(path, outcome.output.as_bytes())
            .with_context(|| format!("Failed to write output file {}", path.display()))?;
        return Ok(());
    }

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if cmd.diff {
        diff_viewer::print_diff(original, &outcome.output, &mut writer, theme_map, supports_color)?;
    } else {
        writer.write_all(outcome.output.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

fn handle_clipboard_output(sanitized_content: &str, theme_map: &ThemeMap) {
    match copy_to_clipboard(sanitized_content) {
        Ok(_) => info_msg("Sanitized content copied to clipboard successfully.", theme_map),
        Err(e) => warn_msg(format!("Failed to copy to clipboard: {:#}", e), theme_map),
    }
}

/// Formats one line of the replacement summary.
pub fn describe_replacement(item: &ReplacementSummaryItem) -> String {
    let became = if item.replacement.is_empty() {
        "removed".to_string()
    } else if item.replacement.chars().eq(std::iter::once(item.info.char)) {
        "kept".to_string()
    } else {
        format!("-> {:?}", item.replacement)
    };
    let plural = if item.occurrences == 1 { "" } else { "s" };
    format!("{} {} {} ({} occurrence{})", item.info.hex_code, item.info.name, became, item.occurrences, plural)
}

fn handle_summary(outcome: &SanitizeOutcome<'_>, theme_map: &ThemeMap) -> Result<()> {
    if outcome.cancelled {
        warn_msg("Sanitization cancelled; the text was left unchanged.", theme_map);
        return Ok(());
    }
    if !outcome.changed() {
        info_msg("No changes needed!", theme_map);
        return Ok(());
    }
    success_msg("Text sanitized successfully!", theme_map);
    let stderr_supports_color = io::stderr().is_terminal();
    let mut stderr = io::stderr();
    for item in &outcome.replacements {
        let line = describe_replacement(item);
        writeln!(stderr, "  {}", styled(&line, ThemeEntry::SummaryOccurrences, theme_map, stderr_supports_color))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanitext_core::CharacterInfo;

    fn item(c: char, replacement: &str, occurrences: usize) -> ReplacementSummaryItem {
        ReplacementSummaryItem { info: CharacterInfo::new(c), replacement: replacement.to_string(), occurrences }
    }

    #[test]
    fn describes_each_kind_of_resolution() {
        assert_eq!(describe_replacement(&item('\u{2014}', "-", 2)), "U+2014 EM DASH -> \"-\" (2 occurrences)");
        assert!(describe_replacement(&item('\u{200B}', "", 1)).ends_with("removed (1 occurrence)"));
        assert!(describe_replacement(&item('\u{00E9}', "\u{00E9}", 1)).contains("kept"));
    }
}
