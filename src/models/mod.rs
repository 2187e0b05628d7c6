//! Data models module
//!
//! Defines the calendar date model behind daily logs and its resolution
//! from free-form user input.

pub mod date;

pub use date::LogDate;
