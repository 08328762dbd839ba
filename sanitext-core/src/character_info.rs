// sanitext-core/src/character_info.rs
//! Provides the descriptive record for a disallowed character and the summary
//! types used for reporting, plus the logging helpers that keep raw offending
//! characters out of debug logs unless explicitly allowed.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::tables;

lazy_static! {
    /// Initialized once: whether raw characters may appear in debug logs.
    static ref RAW_TEXT_DEBUG_ALLOWED: bool = {
        std::env::var("SANITEXT_ALLOW_DEBUG_TEXT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Describes one disallowed character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterInfo {
    pub char: char,
    pub code_point: u32,
    /// `U+` followed by at least four uppercase hex digits.
    pub hex_code: String,
    pub name: String,
}

impl CharacterInfo {
    pub fn new(c: char) -> Self {
        Self {
            char: c,
            code_point: c as u32,
            hex_code: hex_code(c),
            name: character_name(c),
        }
    }
}

/// Formats `c` as `U+XXXX`, zero-padded to at least four uppercase hex digits.
pub fn hex_code(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// Returns the Unicode name of `c`, or `Character at code point N` when unknown.
pub fn character_name(c: char) -> String {
    tables::unicode_name(c).unwrap_or_else(|| format!("Character at code point {}", c as u32))
}

/// All detections of one distinct character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionSummaryItem {
    pub info: CharacterInfo,
    pub occurrences: usize,
}

/// What one distinct disallowed character became in a sanitization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementSummaryItem {
    pub info: CharacterInfo,
    /// The substituted text; empty means the character was removed.
    pub replacement: String,
    pub occurrences: usize,
}

/// Renders a character for logs: the raw character only when allowed.
pub(crate) fn loggable_char(c: char) -> String {
    if *RAW_TEXT_DEBUG_ALLOWED {
        format!("'{}' ({})", c.escape_debug(), hex_code(c))
    } else {
        hex_code(c)
    }
}

/// Renders a replacement for logs.
pub(crate) fn loggable_replacement(s: &str) -> String {
    if *RAW_TEXT_DEBUG_ALLOWED {
        format!("{:?}", s)
    } else {
        format!("[{} chars]", s.chars().count())
    }
}

pub(crate) fn log_resolution_debug(module_path: &str, c: char, replacement: &str, how: &str) {
    debug!(
        "{} Resolved {} via {} -> {}",
        module_path,
        loggable_char(c),
        how,
        loggable_replacement(replacement)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_code_padding() {
        assert_eq!(hex_code('A'), "U+0041");
        assert_eq!(hex_code('\u{1F600}'), "U+1F600");
        assert_eq!(hex_code('\u{7}'), "U+0007");
        assert_eq!(hex_code('\u{10FFFF}'), "U+10FFFF");
    }

    #[test]
    fn test_character_info_fields() {
        let info = CharacterInfo::new('\u{200B}');
        assert_eq!(info.char, '\u{200B}');
        assert_eq!(info.code_point, 0x200B);
        assert_eq!(info.hex_code, "U+200B");
        assert_eq!(info.name, "ZERO WIDTH SPACE");
    }

    #[test]
    fn test_name_fallback() {
        assert_eq!(character_name('\u{E000}'), "Character at code point 57344");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(CharacterInfo::new('A')).unwrap();
        assert_eq!(json["codePoint"], 65);
        assert_eq!(json["hexCode"], "U+0041");
    }
}
