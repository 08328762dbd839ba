// sanitext-core/src/decision/mod.rs
//! Decides what each distinct disallowed character becomes.
//!
//! A run resolves every distinct character exactly once, either automatically
//! through [`resolve_closest`] or by asking a [`DecisionProvider`]. Asking is a
//! strictly sequential suspend/resume protocol: one `CharacterInfo` goes out,
//! the engine waits for one `Decision`, and only then moves to the next
//! character. A `Cancel` decision abandons the whole run.
//!
//! License: MIT OR APACHE 2.0

use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::allowed_set::AllowedSet;
use crate::character_info::{loggable_char, CharacterInfo};
use crate::config::DecisionOrder;
use crate::resolver::resolve_closest;

pub mod channel;

/// The resolution chosen for one distinct disallowed character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "replacement", rename_all = "snake_case")]
pub enum Decision {
    /// Keep the character as it is.
    Keep,
    /// Drop the character.
    Remove,
    /// Substitute the given text, which may be empty.
    Replace(String),
    /// Abandon the run; the caller gets the original text back.
    Cancel,
}

/// Supplies interactive decisions, one character at a time.
#[async_trait]
pub trait DecisionProvider: Send {
    /// Returns the decision for `info`. The engine does not call this again
    /// until the returned future has resolved.
    async fn decide(&mut self, info: &CharacterInfo) -> Decision;
}

/// Maps each decided character to its substitution for the current run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionTable {
    entries: HashMap<char, String>,
}

impl DecisionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the substitution recorded for `c`.
    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(String::as_str)
    }

    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn record(&mut self, c: char, replacement: String) {
        self.entries.insert(c, replacement);
    }
}

/// The result of deciding every distinct disallowed character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Complete(DecisionTable),
    Cancelled,
}

/// Resolves every character of `distinct` without asking anyone.
pub fn resolve_automatically(distinct: &[char], allowed: &AllowedSet) -> DecisionTable {
    let mut table = DecisionTable::new();
    for &c in distinct {
        if !table.contains(c) {
            table.record(c, resolve_closest(c, allowed));
        }
    }
    table
}

/// Resolves every character of `distinct`.
///
/// With `interactive` set and a `provider` present, characters are presented
/// in `order`, each at most once, and a `Cancel` stops the run immediately.
/// Otherwise every character is resolved automatically.
pub async fn resolve_all(
    distinct: &[char],
    allowed: &AllowedSet,
    interactive: bool,
    provider: Option<&mut (dyn DecisionProvider + '_)>,
    order: DecisionOrder,
) -> Resolution {
    let provider = match provider {
        Some(p) if interactive => p,
        _ => return Resolution::Complete(resolve_automatically(distinct, allowed)),
    };

    let mut pending = distinct.to_vec();
    order.sort(&mut pending);

    let mut table = DecisionTable::new();
    for c in pending {
        if table.contains(c) {
            continue;
        }
        let info = CharacterInfo::new(c);
        let decision = provider.decide(&info).await;
        debug!("Decision for {}: {}", loggable_char(c), decision_kind(&decision));

        let replacement = match decision {
            Decision::Keep => c.to_string(),
            Decision::Remove => String::new(),
            Decision::Replace(r) => r,
            Decision::Cancel => {
                info!("Interactive run cancelled at {}; discarding {} decisions.", info.hex_code, table.len());
                return Resolution::Cancelled;
            }
        };
        table.record(c, replacement);
    }
    Resolution::Complete(table)
}

/// A log-safe label that never carries the replacement text.
fn decision_kind(decision: &Decision) -> &'static str {
    match decision {
        Decision::Keep => "keep",
        Decision::Remove => "remove",
        Decision::Replace(_) => "replace",
        Decision::Cancel => "cancel",
    }
}
