//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - (default): open or create a day's log and launch the editor
//! - config: open the configuration file and wait for the editor
//! - search: regex-search all stored logs

pub mod config;
pub mod open;
pub mod search;
