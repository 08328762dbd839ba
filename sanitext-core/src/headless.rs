// File: sanitext-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the core engine without any user interaction.
//! Provides helper functions for a full, one-shot detection or sanitization of strings.

use crate::character_info::CharacterInfo;
use crate::config::SanitizeOptions;
use crate::pipeline::sanitize_non_interactive;
use crate::detector;

/// Fully sanitizes an input string, resolving every disallowed character
/// automatically. `options.interactive` is ignored.
///
/// # Arguments
///
/// * `content` - The string to be sanitized.
/// * `options` - Which characters are acceptable.
pub fn headless_sanitize_string(content: &str, options: &SanitizeOptions) -> String {
    let allowed = options.allowed_set();
    sanitize_non_interactive(content, &allowed).into_owned()
}

/// Lists every disallowed character of `content` in order of occurrence.
pub fn headless_detect(content: &str, options: &SanitizeOptions) -> Vec<CharacterInfo> {
    detector::detect(content, &options.allowed_set())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_sanitize_string_defaults() {
        let options = SanitizeOptions::default();
        let sanitized = headless_sanitize_string("It\u{2019}s \u{2014} fine\u{00A0}\u{1F600}", &options);
        assert_eq!(sanitized, "It's - fine ");
    }

    #[test]
    fn test_headless_ignores_interactive_flag() {
        let options = SanitizeOptions { interactive: true, ..Default::default() };
        assert_eq!(headless_sanitize_string("\u{FF48}i", &options), "hi");
    }

    #[test]
    fn test_headless_detect_with_allow_chars() {
        let options = SanitizeOptions { allow_chars: "\u{00E9}".to_string(), ..Default::default() };
        let found = headless_detect("caf\u{00E9} \u{2014}", &options);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].hex_code, "U+2014");
    }
}
