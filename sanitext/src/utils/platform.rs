// sanitext/src/utils/platform.rs

/// The key combination that ends interactive stdin input on this platform.
pub fn eof_key_combo() -> &'static str {
    if cfg!(windows) { "Ctrl+Z" } else { "Ctrl+D" }
}
