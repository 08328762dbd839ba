// sanitext-core/src/lib.rs
//! # SaniText Core Library
//!
//! `sanitext-core` filters arbitrary text against an allowlist of acceptable
//! characters, reports what falls outside it, and resolves each disallowed
//! character either automatically (homoglyph mapping, then NFKC normalization,
//! then removal) or through an interactive, one-character-at-a-time decision
//! protocol.
//!
//! The library is pure and free of I/O. Clipboard, files, prompts and
//! rendering belong to the caller.
//!
//! ## Modules
//!
//! * `allowed_set`: Builds the set of acceptable characters.
//! * `tables`: Static homoglyph map, emoji set and character names.
//! * `character_info`: Descriptive records and summaries for reporting.
//! * `detector`: Finds disallowed characters.
//! * `resolver`: Finds the closest in-policy equivalent of a character.
//! * `decision`: Decides each distinct disallowed character, automatically or interactively.
//! * `pipeline`: Rebuilds the text from the decisions.
//! * `config`: Typed options with YAML loading and merging.
//! * `headless`: One-shot, non-interactive convenience wrappers.
//!
//! ## Usage Example
//!
//! ```rust
//! use sanitext_core::{build_allowed_set, detect, sanitize_non_interactive};
//!
//! let allowed = build_allowed_set(false, "".chars());
//! let input = "\u{201C}H\u{00E9}llo\u{201D}\u{200B}";
//!
//! assert_eq!(detect(input, &allowed).len(), 4);
//! assert_eq!(sanitize_non_interactive(input, &allowed), "\"Hello\"");
//! ```
//!
//! Interactive runs take a [`DecisionProvider`]. [`decision_channel`] gives a
//! ready-made provider whose requests can be answered from another task or a
//! plain thread.
//!
//! ## Error Handling
//!
//! Detection, resolution and sanitization never fail. Only loading options
//! can, and reports it through [`SanitextError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod allowed_set;
pub mod character_info;
pub mod config;
pub mod decision;
pub mod detector;
pub mod errors;
pub mod headless;
pub mod pipeline;
pub mod resolver;
pub mod tables;

/// Re-exports the allowed-set builder.
pub use allowed_set::{build_allowed_set, AllowedSet};

/// Re-exports reporting types.
pub use character_info::{CharacterInfo, DetectionSummaryItem, ReplacementSummaryItem};

/// Re-exports the option types and helpers.
pub use config::{merge_options, DecisionOrder, SanitizeOptions};

/// Re-exports the decision engine.
pub use decision::channel::{decision_channel, ChannelDecider, DecisionRequest, DecisionRequests};
pub use decision::{resolve_all, Decision, DecisionProvider, DecisionTable, Resolution};

pub use detector::{detect, distinct_disallowed, summarize};
pub use errors::SanitextError;
pub use headless::{headless_detect, headless_sanitize_string};
pub use pipeline::{sanitize, sanitize_non_interactive, SanitizeOutcome, Sanitizer};
pub use resolver::resolve_closest;
