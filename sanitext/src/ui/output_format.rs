// sanitext/src/ui/output_format.rs
//! Prefixed, themed status messages for stderr.

use std::io::{self, Write};

use super::theme::{styled, ThemeEntry, ThemeMap};

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled(&format!("{}{}", prefix, msg), entry, theme_map, enable_colors))
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Info, theme_map, enable_colors)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Success, theme_map, enable_colors)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "Warning: ", msg, ThemeEntry::Warn, theme_map, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme_map: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "Error: ", msg, ThemeEntry::Error, theme_map, enable_colors)
}
