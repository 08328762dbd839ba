// sanitext/src/ui/mod.rs
//! Terminal rendering: colour theme, message helpers, reports, diffs and the
//! interactive decision prompt.

pub mod char_display;
pub mod detection_report;
pub mod diff_viewer;
pub mod output_format;
pub mod prompt;
pub mod theme;
