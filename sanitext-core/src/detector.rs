//! detector.rs - Finds characters that fall outside an allowed set.
//!
//! License: MIT OR Apache-2.0

use std::collections::{HashMap, HashSet};

use crate::allowed_set::AllowedSet;
use crate::character_info::{CharacterInfo, DetectionSummaryItem};

/// Returns one `CharacterInfo` per disallowed scalar value of `text`, in order
/// of occurrence and without deduplication.
pub fn detect(text: &str, allowed: &AllowedSet) -> Vec<CharacterInfo> {
    text.chars()
        .filter(|c| !allowed.contains(*c))
        .map(CharacterInfo::new)
        .collect()
}

/// Returns each distinct disallowed character of `text` once, in order of
/// first occurrence.
pub fn distinct_disallowed(text: &str, allowed: &AllowedSet) -> Vec<char> {
    let mut seen = HashSet::new();
    text.chars()
        .filter(|c| !allowed.contains(*c) && seen.insert(*c))
        .collect()
}

/// Groups the detections of `text` by character, in order of first occurrence.
pub fn summarize(text: &str, allowed: &AllowedSet) -> Vec<DetectionSummaryItem> {
    let mut index: HashMap<char, usize> = HashMap::new();
    let mut items: Vec<DetectionSummaryItem> = Vec::new();

    for c in text.chars().filter(|c| !allowed.contains(*c)) {
        match index.get(&c) {
            Some(&i) => items[i].occurrences += 1,
            None => {
                index.insert(c, items.len());
                items.push(DetectionSummaryItem {
                    info: CharacterInfo::new(c),
                    occurrences: 1,
                });
            }
        }
    }
    items
}
