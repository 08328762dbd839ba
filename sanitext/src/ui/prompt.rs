// sanitext/src/ui/prompt.rs
//! The interactive decision prompt.
//!
//! Runs on a blocking thread and answers the engine's requests one at a time
//! from a line-oriented reader. End of input cancels the run.

use anyhow::Result;
use log::debug;
use std::io::{BufRead, Write};

use sanitext_core::{resolve_closest, AllowedSet, CharacterInfo, Decision, DecisionRequests};

use super::char_display::display_char;
use super::theme::{styled, ThemeEntry, ThemeMap};

/// What the user typed on the first line of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Keep,
    Remove,
    Replace,
    Cancel,
}

/// Parses one answer line. Case and surrounding whitespace are ignored.
pub fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim().to_lowercase().as_str() {
        "k" | "keep" => Some(Choice::Keep),
        "r" | "remove" => Some(Choice::Remove),
        "s" | "replace" | "substitute" => Some(Choice::Replace),
        "c" | "cancel" | "q" | "quit" => Some(Choice::Cancel),
        _ => None,
    }
}

/// Reads one line without its terminator. `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Asks about one character until a valid answer or end of input.
fn ask<R: BufRead, W: Write>(
    info: &CharacterInfo,
    allowed: &AllowedSet,
    input: &mut R,
    out: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<Decision> {
    let suggestion = resolve_closest(info.char, allowed);
    writeln!(
        out,
        "Character {} ({}, {}) is not allowed.",
        styled(&display_char(info.char), ThemeEntry::SummaryChar, theme_map, enable_colors),
        info.hex_code,
        info.name
    )?;
    if suggestion.is_empty() {
        writeln!(out, "  No safe equivalent; automatic handling would remove it.")?;
    } else {
        writeln!(out, "  Closest safe equivalent: {:?}", suggestion)?;
    }

    loop {
        write!(
            out,
            "{}",
            styled("[k]eep, [r]emove, [s]ubstitute, [c]ancel > ", ThemeEntry::Prompt, theme_map, enable_colors)
        )?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            return Ok(Decision::Cancel);
        };
        match parse_choice(&line) {
            Some(Choice::Keep) => return Ok(Decision::Keep),
            Some(Choice::Remove) => return Ok(Decision::Remove),
            Some(Choice::Cancel) => return Ok(Decision::Cancel),
            Some(Choice::Replace) => {
                write!(out, "{}", styled("Replacement > ", ThemeEntry::Prompt, theme_map, enable_colors))?;
                out.flush()?;
                return Ok(match read_line(input)? {
                    Some(replacement) => Decision::Replace(replacement),
                    None => Decision::Cancel,
                });
            }
            None => writeln!(out, "Please enter k, r, s or c.")?,
        }
    }
}

/// Answers every request until the engine side hangs up. Returns the number
/// of requests answered.
///
/// Must run outside the async runtime, e.g. on `spawn_blocking` or a plain thread.
pub fn run_prompt_loop<R: BufRead, W: Write>(
    mut requests: DecisionRequests,
    allowed: &AllowedSet,
    mut input: R,
    mut out: W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<usize> {
    let mut answered = 0;
    while let Some(request) = requests.blocking_next() {
        let decision = match ask(&request.info, allowed, &mut input, &mut out, theme_map, enable_colors) {
            Ok(decision) => decision,
            Err(e) => {
                // Dropping the request cancels the run.
                drop(request);
                return Err(e);
            }
        };
        debug!("Prompt answered for {}.", request.info.hex_code);
        request.respond(decision);
        answered += 1;
    }
    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use sanitext_core::{SanitizeOptions, Sanitizer};
    use std::io::Cursor;

    async fn run_with_input(text: &str, answers: &str) -> (String, bool, String) {
        let options = SanitizeOptions { interactive: true, ..Default::default() };
        let sanitizer = Sanitizer::new(options);
        let allowed = sanitizer.allowed_set().clone();
        let (mut decider, requests) = sanitext_core::decision_channel();

        let answers = answers.to_string();
        let prompt = std::thread::spawn(move || {
            let theme = ThemeStyle::default_theme_map();
            let mut out = Vec::new();
            run_prompt_loop(requests, &allowed, Cursor::new(answers), &mut out, &theme, false).unwrap();
            String::from_utf8(out).unwrap()
        });

        let outcome = sanitizer.sanitize_with_report(text, Some(&mut decider)).await;
        drop(decider);
        let transcript = prompt.join().unwrap();
        (outcome.output.into_owned(), outcome.cancelled, transcript)
    }

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(parse_choice("k"), Some(Choice::Keep));
        assert_eq!(parse_choice(" Remove \n"), Some(Choice::Remove));
        assert_eq!(parse_choice("S"), Some(Choice::Replace));
        assert_eq!(parse_choice("cancel"), Some(Choice::Cancel));
        assert_eq!(parse_choice("x"), None);
        assert_eq!(parse_choice(""), None);
    }

    #[tokio::test]
    async fn answers_drive_the_output() {
        // U+00E9 is asked before U+2014.
        let (out, cancelled, transcript) = run_with_input("caf\u{00E9} \u{2014} x", "s\ne\nr\n").await;
        assert!(!cancelled);
        assert_eq!(out, "cafe  x");
        assert!(transcript.contains("U+00E9"));
        assert!(transcript.contains("U+2014"));
    }

    #[tokio::test]
    async fn invalid_answer_is_asked_again() {
        let (out, _, transcript) = run_with_input("\u{2022}", "?\nk\n").await;
        assert_eq!(out, "\u{2022}");
        assert!(transcript.contains("Please enter k, r, s or c."));
    }

    #[tokio::test]
    async fn empty_replacement_removes() {
        let (out, _, _) = run_with_input("a\u{2022}b", "s\n\n").await;
        assert_eq!(out, "ab");
    }

    #[tokio::test]
    async fn end_of_input_cancels() {
        let (out, cancelled, _) = run_with_input("a\u{2022}b\u{00E9}", "r\n").await;
        assert!(cancelled);
        assert_eq!(out, "a\u{2022}b\u{00E9}");
    }

    #[tokio::test]
    async fn prompt_escapes_terminal_control_characters() {
        let (out, _, transcript) = run_with_input("a\u{1B}[2Jb\u{202E}", "r\nr\n").await;
        assert_eq!(out, "a[2Jb");
        assert!(!transcript.contains('\u{1B}'));
        assert!(!transcript.contains('\u{202E}'));
        assert!(transcript.contains("'\\u{1b}' (U+001B"));
        assert!(transcript.contains("'\\u{202e}' (U+202E"));
    }

    #[tokio::test]
    async fn cancel_keeps_the_original() {
        let (out, cancelled, _) = run_with_input("\u{201C}x\u{201D}", "c\n").await;
        assert!(cancelled);
        assert_eq!(out, "\u{201C}x\u{201D}");
    }
}
