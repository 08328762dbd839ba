//! resolver.rs - Finds the closest in-policy equivalent for a disallowed character.
//!
//! Resolution order:
//!
//! 1. the homoglyph map, when its entry is made of allowed characters only;
//! 2. NFKC normalization, when every resulting character is allowed;
//! 3. otherwise the empty string, meaning the character is removed.
//!
//! License: MIT OR Apache-2.0

use unicode_normalization::UnicodeNormalization;

use crate::allowed_set::AllowedSet;
use crate::character_info::log_resolution_debug;
use crate::tables;

/// Returns the replacement for `c` under `allowed`, or an empty string when
/// there is no safe equivalent.
pub fn resolve_closest(c: char, allowed: &AllowedSet) -> String {
    if let Some(mapped) = tables::homoglyph(c) {
        if allowed.contains_all(mapped) {
            log_resolution_debug(module_path!(), c, mapped, "homoglyph");
            return mapped.to_string();
        }
    }

    let normalized: String = std::iter::once(c).nfkc().collect();
    if allowed.contains_all(&normalized) {
        log_resolution_debug(module_path!(), c, &normalized, "nfkc");
        return normalized;
    }

    log_resolution_debug(module_path!(), c, "", "removal");
    String::new()
}
