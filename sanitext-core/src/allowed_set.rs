//! allowed_set.rs - The membership set that defines acceptable characters.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use std::collections::HashSet;

use crate::tables;

/// Printable ASCII, inclusive.
const ASCII_PRINTABLE: std::ops::RangeInclusive<char> = ' '..='~';

/// Whitespace controls that are always acceptable.
const ALWAYS_ALLOWED_CONTROLS: [char; 3] = ['\n', '\t', '\r'];

/// A set of acceptable Unicode scalar values.
///
/// Membership is per scalar value, never per grapheme cluster. The set is
/// immutable once built; a run that needs a different policy builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedSet {
    chars: HashSet<char>,
}

impl AllowedSet {
    /// Returns true if `c` is acceptable.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Returns true if every scalar value of `s` is acceptable.
    pub fn contains_all(&self, s: &str) -> bool {
        s.chars().all(|c| self.contains(c))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for AllowedSet {
    /// The base policy: printable ASCII plus newline, tab and carriage return.
    fn default() -> Self {
        build_allowed_set(false, std::iter::empty())
    }
}

/// Builds the allowed set from the base policy plus options.
///
/// The base is printable ASCII (U+0020..=U+007E) with `\n`, `\t` and `\r`.
/// With `allow_emoji` every single-codepoint emoji is added, and every
/// character yielded by `allow_chars` is added on top.
pub fn build_allowed_set<I>(allow_emoji: bool, allow_chars: I) -> AllowedSet
where
    I: IntoIterator<Item = char>,
{
    let mut chars: HashSet<char> = ASCII_PRINTABLE.chain(ALWAYS_ALLOWED_CONTROLS).collect();

    if allow_emoji {
        chars.extend(tables::emoji());
    }
    chars.extend(allow_chars);

    debug!("Built allowed set with {} characters (emoji: {}).", chars.len(), allow_emoji);
    AllowedSet { chars }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_set_contents() {
        let set = AllowedSet::default();
        assert_eq!(set.len(), 95 + 3);
        assert!(set.contains(' '));
        assert!(set.contains('~'));
        assert!(set.contains('\n'));
        assert!(set.contains('\t'));
        assert!(set.contains('\r'));
        assert!(!set.contains('\u{7F}'));
        assert!(!set.contains('\u{0B}'));
        assert!(!set.contains('é'));
    }

    #[test]
    fn test_allow_chars_are_added_once() {
        let set = build_allowed_set(false, "ééü".chars());
        assert!(set.contains('é'));
        assert!(set.contains('ü'));
        assert_eq!(set.len(), 98 + 2);
    }

    #[test]
    fn test_allow_emoji() {
        let set = build_allowed_set(true, std::iter::empty());
        assert!(set.contains('\u{1F600}'));
        assert!(!AllowedSet::default().contains('\u{1F600}'));
    }

    #[test]
    fn test_contains_all() {
        let set = AllowedSet::default();
        assert!(set.contains_all("..."));
        assert!(set.contains_all(""));
        assert!(!set.contains_all("a\u{200B}"));
    }
}
