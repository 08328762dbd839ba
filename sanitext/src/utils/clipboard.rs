// sanitext/src/utils/clipboard.rs
//! System clipboard access, available with the `clipboard` feature.

use anyhow::Result;

#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    use anyhow::Context;
    let mut clipboard = arboard::Clipboard::new().context("Could not open the system clipboard")?;
    clipboard.set_text(text.to_owned()).context("Could not write to the system clipboard")?;
    log::debug!("Copied {} bytes to the clipboard.", text.len());
    Ok(())
}

#[cfg(feature = "clipboard")]
pub fn read_from_clipboard() -> Result<String> {
    use anyhow::Context;
    let mut clipboard = arboard::Clipboard::new().context("Could not open the system clipboard")?;
    let text = clipboard.get_text().context("The clipboard holds no text")?;
    log::debug!("Read {} bytes from the clipboard.", text.len());
    Ok(text)
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_text: &str) -> Result<()> {
    anyhow::bail!("Clipboard support is not enabled in this build (enable the `clipboard` feature).")
}

#[cfg(not(feature = "clipboard"))]
pub fn read_from_clipboard() -> Result<String> {
    anyhow::bail!("Clipboard support is not enabled in this build (enable the `clipboard` feature).")
}
