// sanitext/src/ui/char_display.rs
//! Terminal-safe rendering of offending characters.
//!
//! Control characters, Unicode format characters (general category Cf,
//! including every bidi control) and the line/paragraph separators are shown
//! as `\u{..}` escapes so they can never act on the terminal.

/// Code points of general category Cf, plus U+2028 and U+2029.
const INVISIBLE_RANGES: &[(u32, u32)] = &[
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x180E, 0x180E),
    (0x200B, 0x200F),
    (0x2028, 0x202E),
    (0x2060, 0x2064),
    (0x2066, 0x206F),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x1343F),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
];

/// True if `c` must not be written to a terminal as is.
pub fn needs_escape(c: char) -> bool {
    if c.is_control() {
        return true;
    }
    let cp = c as u32;
    INVISIBLE_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Quotes one character for display, escaping it when needed.
pub fn display_char(c: char) -> String {
    if needs_escape(c) {
        format!("'{}'", c.escape_unicode())
    } else {
        format!("'{}'", c)
    }
}

/// Escapes every character of `s` that [`needs_escape`], except tabs.
pub fn escape_for_terminal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c != '\t' && needs_escape(c) {
            out.extend(c.escape_unicode());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_and_bidi_controls_are_escaped() {
        assert_eq!(display_char('\u{1B}'), "'\\u{1b}'");
        assert_eq!(display_char('\u{202E}'), "'\\u{202e}'");
        assert_eq!(display_char('\u{2067}'), "'\\u{2067}'");
        assert_eq!(display_char('\u{200B}'), "'\\u{200b}'");
        assert_eq!(display_char('\u{FEFF}'), "'\\u{feff}'");
        assert_eq!(display_char('\u{E0041}'), "'\\u{e0041}'");
    }

    #[test]
    fn visible_characters_pass_through() {
        assert_eq!(display_char('\u{00E9}'), "'\u{00E9}'");
        assert_eq!(display_char('\u{2014}'), "'\u{2014}'");
        assert_eq!(display_char('\u{1F600}'), "'\u{1F600}'");
    }

    #[test]
    fn strings_keep_tabs_but_lose_escapes() {
        assert_eq!(escape_for_terminal("a\u{1B}[2Jb\tc\u{202E}"), "a\\u{1b}[2Jb\tc\\u{202e}");
    }
}
