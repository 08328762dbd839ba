// sanitext/src/ui/detection_report.rs
//! Renders detection results: a plain list of distinct characters, a
//! detailed table with occurrence counts, or JSON.

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use std::io::Write;

use sanitext_core::{CharacterInfo, DetectionSummaryItem};

use super::char_display::display_char;
use super::theme::{styled, ThemeEntry, ThemeMap};

/// One line per distinct character: `'c' - U+XXXX (NAME)`.
pub fn print_plain<W: Write>(
    summary: &[DetectionSummaryItem],
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    if summary.is_empty() {
        writeln!(writer, "{}", styled("No suspicious characters detected.", ThemeEntry::Success, theme_map, enable_colors))?;
        return Ok(());
    }
    writeln!(writer, "{}", styled("Detected Suspicious Characters:", ThemeEntry::Header, theme_map, enable_colors))?;
    for item in summary {
        writeln!(
            writer,
            "  {} - {} ({})",
            styled(&display_char(item.info.char), ThemeEntry::SummaryChar, theme_map, enable_colors),
            item.info.hex_code,
            item.info.name
        )?;
    }
    Ok(())
}

/// The total count followed by a table of every distinct character.
pub fn print_verbose<W: Write>(
    summary: &[DetectionSummaryItem],
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    if summary.is_empty() {
        return print_plain(summary, writer, theme_map, enable_colors);
    }
    let total: usize = summary.iter().map(|item| item.occurrences).sum();
    writeln!(writer, "{}", styled("Detected Suspicious Characters:", ThemeEntry::Header, theme_map, enable_colors))?;
    writeln!(
        writer,
        "Total suspicious characters found: {}",
        styled(&total.to_string(), ThemeEntry::SummaryOccurrences, theme_map, enable_colors)
    )?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Char", "Unicode", "Code Point", "Name", "Occurrences"]);
    for item in summary {
        table.add_row(vec![
            Cell::new(display_char(item.info.char)),
            Cell::new(&item.info.hex_code),
            Cell::new(item.info.code_point),
            Cell::new(&item.info.name),
            Cell::new(item.occurrences),
        ]);
    }
    writeln!(writer, "{}", table)?;
    Ok(())
}

/// Every detection, in input order, as a pretty-printed JSON array.
pub fn print_json<W: Write>(detections: &[CharacterInfo], writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, detections)?;
    writeln!(writer)?;
    Ok(())
}
