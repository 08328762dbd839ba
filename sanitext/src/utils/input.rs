// sanitext/src/utils/input.rs
//! Reading the text to check from a file, stdin or the clipboard.

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use std::io::Read;
use std::path::PathBuf;

use crate::cli::InputArgs;
use crate::utils::clipboard::read_from_clipboard;

/// Where the input text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Clipboard,
    Stdin,
}

impl InputSource {
    pub fn from_args(args: &InputArgs) -> Self {
        if let Some(path) = &args.input_file {
            InputSource::File(path.clone())
        } else if args.from_clipboard {
            InputSource::Clipboard
        } else {
            InputSource::Stdin
        }
    }
}

/// Maps every byte to the character whose code point equals the byte value.
///
/// This is not a decoding step. It lets arbitrary binary input reach the
/// engine as a well-formed character sequence in which each byte is visible.
pub fn bytes_as_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Turns raw input bytes into text, either byte-per-character or as strict UTF-8.
pub fn decode_input(bytes: Vec<u8>, raw_bytes: bool) -> Result<String> {
    if raw_bytes {
        return Ok(bytes_as_latin1(&bytes));
    }
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => bail!(
            "Input is not valid UTF-8 (invalid byte at offset {}). Use --raw-bytes to inspect it byte by byte.",
            e.utf8_error().valid_up_to()
        ),
    }
}

/// Reads the whole input. Empty input is an error.
pub fn read_input(source: &InputSource, raw_bytes: bool) -> Result<String> {
    let text = match source {
        InputSource::File(path) => {
            debug!("Reading input from file: {}", path.display());
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))?;
            decode_input(bytes, raw_bytes)?
        }
        InputSource::Stdin => {
            debug!("Reading input from stdin.");
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read input from stdin")?;
            decode_input(bytes, raw_bytes)?
        }
        InputSource::Clipboard => {
            debug!("Reading input from the clipboard.");
            let text = read_from_clipboard()?;
            if raw_bytes {
                warn!("--raw-bytes has no effect on clipboard input.");
            }
            text
        }
    };
    if text.is_empty() {
        bail!("No text provided.");
    }
    Ok(text)
}
