// sanitext/src/lib.rs
//! # SaniText CLI Application
//!
//! This crate provides the terminal interface for the `sanitext-core`
//! engine: reading text from files, stdin or the clipboard, reporting
//! suspicious characters, and writing the sanitized result.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;
