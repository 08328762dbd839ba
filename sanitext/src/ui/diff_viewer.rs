// sanitext/src/ui/diff_viewer.rs
//! Line-based unified diff between the input and the sanitized text.

use anyhow::Result;
use diffy::{create_patch, Line as DiffLine};
use std::io::Write;

use super::char_display::escape_for_terminal;
use super::theme::{styled, ThemeEntry, ThemeMap};

/// Writes a coloured diff: removed lines in red prefixed `-`, added lines in
/// green prefixed `+`, context lines indented.
pub fn print_diff<W: Write>(
    original: &str,
    sanitized: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    writeln!(writer, "{}", styled("--- Diff View ---", ThemeEntry::DiffHeader, theme_map, enable_colors))?;

    let patch = create_patch(original, sanitized);
    let mut changes = 0usize;
    for hunk in patch.hunks() {
        for line in hunk.lines() {
            match line {
                DiffLine::Delete(s) => {
                    changes += 1;
                    let text = format!("- {}", escape_for_terminal(s.trim_end_matches('\n')));
                    writeln!(writer, "{}", styled(&text, ThemeEntry::DiffRemoved, theme_map, enable_colors))?;
                }
                DiffLine::Insert(s) => {
                    changes += 1;
                    let text = format!("+ {}", escape_for_terminal(s.trim_end_matches('\n')));
                    writeln!(writer, "{}", styled(&text, ThemeEntry::DiffAdded, theme_map, enable_colors))?;
                }
                DiffLine::Context(s) => {
                    writeln!(writer, "  {}", escape_for_terminal(s.trim_end_matches('\n')))?;
                }
            }
        }
    }
    if changes == 0 {
        writeln!(writer, "No changes detected.")?;
    }

    writeln!(writer, "{}", styled("-----------------", ThemeEntry::DiffHeader, theme_map, enable_colors))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    fn diff(a: &str, b: &str) -> String {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_diff(a, b, &mut buf, &theme, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn shows_changed_line_only() {
        let out = diff("same\nH\u{00E9}llo\n", "same\nHello\n");
        assert!(out.contains("- H\u{00E9}llo"));
        assert!(out.contains("+ Hello"));
        assert!(out.contains("  same"));
    }

    #[test]
    fn removed_lines_are_escaped() {
        let out = diff("x\u{1B}[2J\u{202E}y\n", "x[2Jy\n");
        assert!(!out.contains('\u{1B}'));
        assert!(out.contains("- x\\u{1b}[2J\\u{202e}y"));
    }

    #[test]
    fn identical_inputs_report_no_changes() {
        let out = diff("abc\n", "abc\n");
        assert!(out.contains("No changes detected."));
        assert!(!out.contains("+ "));
    }
}
