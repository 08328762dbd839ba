//! Configuration management for `sanitext-core`.
//!
//! This module defines the typed option structure that replaces an untyped
//! options bag: which extra characters are acceptable, whether emoji pass
//! through, whether disallowed characters are decided interactively, and the
//! order in which interactive decisions are requested. Options can be loaded
//! from YAML, discovered from well-known locations, and merged with overrides.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::allowed_set::{build_allowed_set, AllowedSet};
use crate::errors::SanitextError;

/// Environment variable naming an explicit options file.
pub const CONFIG_ENV_VAR: &str = "SANITEXT_CONFIG";

/// Order in which distinct disallowed characters are presented for interactive decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionOrder {
    /// Ascending numeric Unicode scalar value.
    #[default]
    CodePoint,
    /// Ascending UTF-16 code unit sequence. Characters above the Basic
    /// Multilingual Plane sort by their surrogates, which places them before
    /// U+E000..=U+FFFF.
    Utf16,
}

impl DecisionOrder {
    /// Sorts `chars` in place according to this order.
    pub fn sort(self, chars: &mut [char]) {
        match self {
            DecisionOrder::CodePoint => chars.sort_unstable(),
            DecisionOrder::Utf16 => chars.sort_unstable_by_key(|c| utf16_units(*c)),
        }
    }
}

fn utf16_units(c: char) -> [u16; 2] {
    // Unused trailing unit stays zero.
    let mut buf = [0u16; 2];
    c.encode_utf16(&mut buf);
    buf
}

impl fmt::Display for DecisionOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecisionOrder::CodePoint => write!(f, "code_point"),
            DecisionOrder::Utf16 => write!(f, "utf16"),
        }
    }
}

impl FromStr for DecisionOrder {
    type Err = SanitextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "code_point" | "codepoint" => Ok(DecisionOrder::CodePoint),
            "utf16" | "utf_16" => Ok(DecisionOrder::Utf16),
            _ => Err(SanitextError::InvalidOption {
                option: "decision_order".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Options for one detection or sanitization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// If true, single-codepoint emoji are acceptable.
    pub allow_emoji: bool,
    /// Extra characters that are acceptable, in addition to printable ASCII.
    pub allow_chars: String,
    /// If true, each distinct disallowed character is decided through a
    /// `DecisionProvider` instead of being resolved automatically.
    pub interactive: bool,
    /// Order of interactive decision requests. Unset means code point order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_order: Option<DecisionOrder>,
}

impl SanitizeOptions {
    /// Builds the allowed set these options describe.
    pub fn allowed_set(&self) -> AllowedSet {
        build_allowed_set(self.allow_emoji, self.allow_chars.chars())
    }

    /// The decision order to use, falling back to the default when unset.
    pub fn effective_decision_order(&self) -> DecisionOrder {
        self.decision_order.unwrap_or_default()
    }

    /// Loads options from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SanitextError> {
        let path = path.as_ref();
        info!("Loading options from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(|e| SanitextError::ConfigRead(path.display().to_string(), e))?;
        Self::from_yaml_str(&text)
            .map_err(|e| SanitextError::ConfigParse(path.display().to_string(), e.to_string()))
    }

    /// Parses options from a YAML document. An empty document yields defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yml::from_str(text)
    }

    /// Loads options from the first existing candidate path, or returns defaults.
    pub fn discover() -> Result<Self, SanitextError> {
        for candidate in config_candidate_paths() {
            if candidate.is_file() {
                return Self::load_from_file(&candidate);
            }
            debug!("No options file at {}", candidate.display());
        }
        debug!("No options file found, using defaults.");
        Ok(Self::default())
    }
}

/// Paths searched by [`SanitizeOptions::discover`], highest priority first.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    vec![
        env_path,
        dirs::config_dir().map(|p| p.join("sanitext").join("config.yaml")),
        dirs::home_dir().map(|p| p.join(".sanitext").join("config.yaml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Applies `overrides` on top of `base`.
///
/// Flags are OR-ed so an override can enable but never disable a file setting.
/// Allowed characters accumulate. An override's decision order wins whenever
/// it is set, even if it names the default order.
pub fn merge_options(base: SanitizeOptions, overrides: SanitizeOptions) -> SanitizeOptions {
    debug!("Merging options: base={:?}, overrides={:?}", base, overrides);
    let mut allow_chars = base.allow_chars;
    allow_chars.push_str(&overrides.allow_chars);

    SanitizeOptions {
        allow_emoji: base.allow_emoji || overrides.allow_emoji,
        allow_chars,
        interactive: base.interactive || overrides.interactive,
        decision_order: overrides.decision_order.or(base.decision_order),
    }
}
