//! tables.rs - Static lookup data consumed read-only by the resolver and reporter.
//!
//! The lookup data lives here. Tables are built once on first use and never mutated:
//!
//! * the homoglyph map, from a confusable or typographic character to its
//!   canonical ASCII spelling (curly quotes, dashes, exotic spaces, Cyrillic and
//!   Greek look-alikes, and accented Latin letters folded to their base letter);
//! * the emoji set of single-codepoint emoji;
//! * Unicode character names, looked up through `unicode_names2`.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Explicit homoglyph entries.
const HOMOGLYPH_ENTRIES: &[(char, &str)] = &[
    // Quotation marks and primes
    ('\u{2018}', "'"), // LEFT SINGLE QUOTATION MARK
    ('\u{2019}', "'"), // RIGHT SINGLE QUOTATION MARK
    ('\u{201A}', ","), // SINGLE LOW-9 QUOTATION MARK
    ('\u{201B}', "'"), // SINGLE HIGH-REVERSED-9 QUOTATION MARK
    ('\u{201C}', "\""), // LEFT DOUBLE QUOTATION MARK
    ('\u{201D}', "\""), // RIGHT DOUBLE QUOTATION MARK
    ('\u{201E}', "\""), // DOUBLE LOW-9 QUOTATION MARK
    ('\u{201F}', "\""), // DOUBLE HIGH-REVERSED-9 QUOTATION MARK
    ('\u{2032}', "'"), // PRIME
    ('\u{2033}', "\""), // DOUBLE PRIME
    ('\u{00AB}', "\""), // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
    ('\u{00BB}', "\""), // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
    ('\u{2039}', "<"), // SINGLE LEFT-POINTING ANGLE QUOTATION MARK
    ('\u{203A}', ">"), // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
    ('\u{00B4}', "'"), // ACUTE ACCENT
    ('\u{02BC}', "'"), // MODIFIER LETTER APOSTROPHE
    // Dashes and minus signs
    ('\u{2010}', "-"), // HYPHEN
    ('\u{2011}', "-"), // NON-BREAKING HYPHEN
    ('\u{2012}', "-"), // FIGURE DASH
    ('\u{2013}', "-"), // EN DASH
    ('\u{2014}', "-"), // EM DASH
    ('\u{2015}', "-"), // HORIZONTAL BAR
    ('\u{2212}', "-"), // MINUS SIGN
    ('\u{FE58}', "-"), // SMALL EM DASH
    // Spaces
    ('\u{00A0}', " "), // NO-BREAK SPACE
    ('\u{2000}', " "),
    ('\u{2001}', " "),
    ('\u{2002}', " "),
    ('\u{2003}', " "),
    ('\u{2004}', " "),
    ('\u{2005}', " "),
    ('\u{2006}', " "),
    ('\u{2007}', " "),
    ('\u{2008}', " "),
    ('\u{2009}', " "),
    ('\u{200A}', " "),
    ('\u{202F}', " "), // NARROW NO-BREAK SPACE
    ('\u{205F}', " "), // MEDIUM MATHEMATICAL SPACE
    ('\u{3000}', " "), // IDEOGRAPHIC SPACE
    // Punctuation
    ('\u{2026}', "..."), // HORIZONTAL ELLIPSIS
    ('\u{2022}', "*"),   // BULLET
    ('\u{2024}', "."),   // ONE DOT LEADER
    ('\u{2044}', "/"),   // FRACTION SLASH
    ('\u{2215}', "/"),   // DIVISION SLASH
    ('\u{00D7}', "x"),   // MULTIPLICATION SIGN
    ('\u{02C6}', "^"),   // MODIFIER LETTER CIRCUMFLEX ACCENT
    ('\u{02DC}', "~"),   // SMALL TILDE
    // Latin letters without a decomposition
    ('\u{00C6}', "AE"),
    ('\u{00E6}', "ae"),
    ('\u{0152}', "OE"),
    ('\u{0153}', "oe"),
    ('\u{00DF}', "ss"),
    ('\u{00D8}', "O"),
    ('\u{00F8}', "o"),
    ('\u{0110}', "D"),
    ('\u{0111}', "d"),
    ('\u{0141}', "L"),
    ('\u{0142}', "l"),
    ('\u{0131}', "i"),
    // Cyrillic look-alikes
    ('\u{0430}', "a"),
    ('\u{0441}', "c"),
    ('\u{0435}', "e"),
    ('\u{043E}', "o"),
    ('\u{0440}', "p"),
    ('\u{0445}', "x"),
    ('\u{0443}', "y"),
    ('\u{0456}', "i"),
    ('\u{0458}', "j"),
    ('\u{0455}', "s"),
    ('\u{0410}', "A"),
    ('\u{0412}', "B"),
    ('\u{0421}', "C"),
    ('\u{0415}', "E"),
    ('\u{041D}', "H"),
    ('\u{0406}', "I"),
    ('\u{0408}', "J"),
    ('\u{041A}', "K"),
    ('\u{041C}', "M"),
    ('\u{041E}', "O"),
    ('\u{0420}', "P"),
    ('\u{0405}', "S"),
    ('\u{0422}', "T"),
    ('\u{0425}', "X"),
    // Greek look-alikes
    ('\u{0391}', "A"),
    ('\u{0392}', "B"),
    ('\u{0395}', "E"),
    ('\u{0396}', "Z"),
    ('\u{0397}', "H"),
    ('\u{0399}', "I"),
    ('\u{039A}', "K"),
    ('\u{039C}', "M"),
    ('\u{039D}', "N"),
    ('\u{039F}', "O"),
    ('\u{03A1}', "P"),
    ('\u{03A4}', "T"),
    ('\u{03A5}', "Y"),
    ('\u{03A7}', "X"),
    ('\u{03BF}', "o"),
];

/// Blocks whose precomposed letters are folded onto their ASCII base letter.
const ACCENT_FOLD_RANGES: &[(u32, u32)] = &[
    (0x00C0, 0x024F), // Latin-1 Supplement letters, Latin Extended-A and -B
    (0x1E00, 0x1EFF), // Latin Extended Additional
];

static HOMOGLYPHS: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut map: HashMap<char, &'static str> = HashMap::new();
    for &(start, end) in ACCENT_FOLD_RANGES {
        for c in (start..=end).filter_map(char::from_u32) {
            if let Some(base) = ascii_base_letter(c) {
                map.insert(c, base);
            }
        }
    }
    // Explicit entries win over derived ones.
    map.extend(HOMOGLYPH_ENTRIES.iter().copied());
    map
});

/// Returns the ASCII letter `c` decomposes to when the rest of its canonical
/// decomposition is combining marks only.
fn ascii_base_letter(c: char) -> Option<&'static str> {
    let mut decomposed = std::iter::once(c).nfd();
    let base = decomposed.next()?;
    if base == c || !base.is_ascii_alphabetic() {
        return None;
    }
    if decomposed.all(is_combining_mark) {
        ASCII_LETTERS
            .iter()
            .find(|s| s.starts_with(base))
            .copied()
    } else {
        None
    }
}

const ASCII_LETTERS: [&str; 52] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j",
    "k", "l", "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
];

/// Returns the canonical ASCII spelling for a homoglyph, if one is known.
pub fn homoglyph(c: char) -> Option<&'static str> {
    HOMOGLYPHS.get(&c).copied()
}

/// Number of entries in the homoglyph map.
pub fn homoglyph_count() -> usize {
    HOMOGLYPHS.len()
}

/// Ranges of single-codepoint emoji.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F300, 0x1F5FF), // Miscellaneous Symbols and Pictographs
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F680, 0x1F6FF), // Transport and Map Symbols
    (0x1F7E0, 0x1F7EB), // Geometric Shapes Extended (coloured circles and squares)
    (0x1F900, 0x1F9FF), // Supplemental Symbols and Pictographs
    (0x1FA70, 0x1FAFF), // Symbols and Pictographs Extended-A
    (0x1F1E6, 0x1F1FF), // Regional indicators
    (0x2194, 0x2199),
    (0x23E9, 0x23F3),
    (0x23F8, 0x23FA),
    (0x25FB, 0x25FE),
    (0x2B05, 0x2B07),
    (0x1F191, 0x1F19A),
    (0x1F232, 0x1F23A),
    // Miscellaneous Symbols with the Emoji property
    (0x2600, 0x2604),
    (0x2614, 0x2615),
    (0x2622, 0x2623),
    (0x262E, 0x262F),
    (0x2638, 0x263A),
    (0x2648, 0x2653),
    (0x265F, 0x2660),
    (0x2665, 0x2666),
    (0x267E, 0x267F),
    (0x2692, 0x2697),
    (0x269B, 0x269C),
    (0x26A0, 0x26A1),
    (0x26AA, 0x26AB),
    (0x26B0, 0x26B1),
    (0x26BD, 0x26BE),
    (0x26C4, 0x26C5),
    (0x26CE, 0x26CF),
    (0x26D3, 0x26D4),
    (0x26E9, 0x26EA),
    (0x26F0, 0x26F5),
    (0x26F7, 0x26FA),
    // Dingbats with the Emoji property
    (0x2708, 0x270D),
    (0x2733, 0x2734),
    (0x2753, 0x2755),
    (0x2763, 0x2764),
    (0x2795, 0x2797),
];

/// Individual emoji codepoints outside the ranges above.
const EMOJI_SINGLES: &[u32] = &[
    0x00A9, 0x00AE, 0x203C, 0x2049, 0x2122, 0x2139, 0x21A9, 0x21AA, 0x231A, 0x231B, 0x2328,
    0x23CF, 0x24C2, 0x25AA, 0x25AB, 0x25B6, 0x25C0, 0x2934, 0x2935, 0x2B1B, 0x2B1C, 0x2B50,
    0x2B55, 0x3030, 0x303D, 0x3297, 0x3299, 0x1F004, 0x1F0CF, 0x1F170, 0x1F171, 0x1F17E,
    0x1F17F, 0x1F18E, 0x1F201, 0x1F202, 0x1F21A, 0x1F22F, 0x1F250, 0x1F251, 0x260E, 0x2611,
    0x2618, 0x261D, 0x2620, 0x2626, 0x262A, 0x2640, 0x2642, 0x2663, 0x2668, 0x267B, 0x2699,
    0x26A7, 0x26C8, 0x26D1, 0x26FD, 0x2702, 0x2705, 0x270F, 0x2712, 0x2714, 0x2716, 0x271D,
    0x2721, 0x2728, 0x2744, 0x2747, 0x274C, 0x274E, 0x2757, 0x27A1, 0x27B0, 0x27BF,
];

static EMOJI_SET: Lazy<HashSet<char>> = Lazy::new(|| {
    EMOJI_RANGES
        .iter()
        .flat_map(|&(start, end)| start..=end)
        .chain(EMOJI_SINGLES.iter().copied())
        .filter_map(char::from_u32)
        .collect()
});

/// Iterates over every single-codepoint emoji.
pub fn emoji() -> impl Iterator<Item = char> {
    EMOJI_SET.iter().copied()
}

/// Returns true if `c` is a single-codepoint emoji.
pub fn is_emoji(c: char) -> bool {
    EMOJI_SET.contains(&c)
}

/// Looks up the Unicode character name of `c`.
///
/// Characters without a formal name (controls, private use, unassigned)
/// return `None`.
pub fn unicode_name(c: char) -> Option<String> {
    unicode_names2::name(c).map(|name| name.to_string())
}
