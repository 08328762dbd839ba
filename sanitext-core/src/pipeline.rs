// sanitext-core/src/pipeline.rs
//! The sanitization pipeline.
//!
//! Detection finds the distinct disallowed characters, the decision engine
//! settles each of them once, and the text is rebuilt scalar value by scalar
//! value with every decided character replaced by its substitution. Text that
//! needs no change, and any run that is cancelled, comes back borrowed and
//! untouched.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use std::borrow::Cow;
use std::collections::HashMap;

use crate::allowed_set::AllowedSet;
use crate::character_info::{CharacterInfo, DetectionSummaryItem, ReplacementSummaryItem};
use crate::config::{DecisionOrder, SanitizeOptions};
use crate::decision::{resolve_all, resolve_automatically, DecisionProvider, DecisionTable, Resolution};
use crate::detector;

/// The full result of one sanitization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeOutcome<'a> {
    /// The sanitized text, or the input itself when nothing changed or the run was cancelled.
    pub output: Cow<'a, str>,
    /// True if an interactive decision cancelled the run.
    pub cancelled: bool,
    /// One entry per distinct disallowed character, in order of first occurrence.
    /// Empty when the run was cancelled.
    pub replacements: Vec<ReplacementSummaryItem>,
}

impl SanitizeOutcome<'_> {
    /// True if the output differs from the input.
    pub fn changed(&self) -> bool {
        matches!(self.output, Cow::Owned(_))
    }
}

/// Sanitizes `text` against `allowed`.
///
/// Interactive decisions are used only when `interactive` is set and a
/// provider is given; otherwise every character is resolved automatically.
pub async fn sanitize<'a>(
    text: &'a str,
    allowed: &AllowedSet,
    interactive: bool,
    provider: Option<&mut (dyn DecisionProvider + '_)>,
) -> Cow<'a, str> {
    run(text, allowed, interactive, provider, DecisionOrder::default()).await.output
}

/// Synchronous, non-interactive sanitization.
pub fn sanitize_non_interactive<'a>(text: &'a str, allowed: &AllowedSet) -> Cow<'a, str> {
    let distinct = detector::distinct_disallowed(text, allowed);
    if distinct.is_empty() {
        return Cow::Borrowed(text);
    }
    let table = resolve_automatically(&distinct, allowed);
    apply(text, &table)
}

async fn run<'a>(
    text: &'a str,
    allowed: &AllowedSet,
    interactive: bool,
    provider: Option<&mut (dyn DecisionProvider + '_)>,
    order: DecisionOrder,
) -> SanitizeOutcome<'a> {
    let distinct = detector::distinct_disallowed(text, allowed);
    if distinct.is_empty() {
        debug!("No disallowed characters; returning input unchanged.");
        return SanitizeOutcome { output: Cow::Borrowed(text), cancelled: false, replacements: Vec::new() };
    }
    info!("Found {} distinct disallowed characters.", distinct.len());

    let table = match resolve_all(&distinct, allowed, interactive, provider, order).await {
        Resolution::Complete(table) => table,
        Resolution::Cancelled => {
            return SanitizeOutcome { output: Cow::Borrowed(text), cancelled: true, replacements: Vec::new() };
        }
    };

    let replacements = summarize_replacements(text, &distinct, &table);
    let output = apply(text, &table);
    debug!(
        "Sanitized {} chars into {} chars.",
        text.chars().count(),
        output.chars().count()
    );
    SanitizeOutcome { output, cancelled: false, replacements }
}

/// Rebuilds `text`, substituting every character found in `table`.
fn apply<'a>(text: &'a str, table: &DecisionTable) -> Cow<'a, str> {
    let mut out = String::with_capacity(text.len());
    let mut changed = false;
    for c in text.chars() {
        match table.get(c) {
            Some(replacement) => {
                changed |= replacement.len() != c.len_utf8() || !replacement.starts_with(c);
                out.push_str(replacement);
            }
            None => out.push(c),
        }
    }
    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(text)
    }
}

fn summarize_replacements(text: &str, distinct: &[char], table: &DecisionTable) -> Vec<ReplacementSummaryItem> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in text.chars().filter(|c| table.contains(*c)) {
        *counts.entry(c).or_default() += 1;
    }
    distinct
        .iter()
        .map(|&c| ReplacementSummaryItem {
            info: CharacterInfo::new(c),
            replacement: table.get(c).unwrap_or_default().to_string(),
            occurrences: counts.get(&c).copied().unwrap_or(0),
        })
        .collect()
}

/// A reusable sanitizer bound to one allowed set and one set of options.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    allowed: AllowedSet,
    options: SanitizeOptions,
}

impl Sanitizer {
    pub fn new(options: SanitizeOptions) -> Self {
        let allowed = options.allowed_set();
        Self { allowed, options }
    }

    pub fn allowed_set(&self) -> &AllowedSet {
        &self.allowed
    }

    pub fn options(&self) -> &SanitizeOptions {
        &self.options
    }

    /// Every disallowed character of `text`, in order, with duplicates.
    pub fn detect(&self, text: &str) -> Vec<CharacterInfo> {
        detector::detect(text, &self.allowed)
    }

    /// Disallowed characters of `text` grouped with their occurrence counts.
    pub fn summarize(&self, text: &str) -> Vec<DetectionSummaryItem> {
        detector::summarize(text, &self.allowed)
    }

    /// Sanitizes `text` without asking anyone, regardless of `options.interactive`.
    pub fn sanitize_non_interactive<'a>(&self, text: &'a str) -> Cow<'a, str> {
        sanitize_non_interactive(text, &self.allowed)
    }

    /// Sanitizes `text`, asking `provider` when the options are interactive.
    pub async fn sanitize<'a>(
        &self,
        text: &'a str,
        provider: Option<&mut (dyn DecisionProvider + '_)>,
    ) -> Cow<'a, str> {
        self.sanitize_with_report(text, provider).await.output
    }

    /// Like [`sanitize`](Self::sanitize) but also reports what happened.
    pub async fn sanitize_with_report<'a>(
        &self,
        text: &'a str,
        provider: Option<&mut (dyn DecisionProvider + '_)>,
    ) -> SanitizeOutcome<'a> {
        run(text, &self.allowed, self.options.interactive, provider, self.options.effective_decision_order()).await
    }
}
