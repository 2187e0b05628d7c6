//! Log search module
//!
//! Brute-force regex search over stored logs: enumerates every
//! {root}/{year}/{month}/{day}.txt file, matches each compiled term against
//! the full file text, and cuts a fixed-radius context window around every
//! match for display.

use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::error::{Result, WmError};

/// A single regex match with its rendered context window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Byte offset of the match start within the file content
    pub offset: usize,
    /// Context lines around the match, each indented with a tab
    pub context: String,
}

/// Compile each search term as a regular expression.
///
/// A malformed term is fatal; callers invoke this before reading any file.
pub fn compile_terms(terms: &[String]) -> Result<Vec<Regex>> {
    terms
        .iter()
        .map(|term| {
            Regex::new(term).map_err(|e| WmError::SearchTerm {
                term: term.clone(),
                source: e,
            })
        })
        .collect()
}

/// Enumerate log files under the root in {year}/{month}/{day}.txt layout.
///
/// Year and month are matched as digit sequences, not validated as
/// calendar values; any .txt file below them counts. The order is
/// deterministic (sorted by file name) but not chronological: "10" sorts
/// before "2".
pub fn log_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(3)
        .max_depth(3)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_log_file(root, path))
        .collect()
}

fn is_log_file(root: &Path, path: &Path) -> bool {
    let rel = match path.strip_prefix(root) {
        Ok(rel) => rel,
        Err(_) => return false,
    };
    let parts: Vec<String> = rel
        .iter()
        .map(|part| part.to_string_lossy().into_owned())
        .collect();
    if parts.len() != 3 {
        return false;
    }
    parts[2].ends_with(".txt") && is_digits(&parts[0]) && is_digits(&parts[1])
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Find all non-overlapping matches of one pattern in a file's content.
pub fn scan(content: &str, pattern: &Regex, radius: usize) -> Vec<SearchHit> {
    pattern
        .find_iter(content)
        .map(|m| SearchHit {
            offset: m.start(),
            context: context_window(content, m.start(), radius),
        })
        .collect()
}

/// Cut a window of `radius` bytes either side of `start`, clamped to the
/// content bounds and snapped to character boundaries, then indent every
/// line with a tab.
fn context_window(content: &str, start: usize, radius: usize) -> String {
    let lo = floor_char_boundary(content, start.saturating_sub(radius));
    let hi = ceil_char_boundary(content, start.saturating_add(radius).min(content.len()));

    let mut out = String::new();
    for line in content[lo..hi].split('\n') {
        out.push('\t');
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(s: &str, mut index: usize) -> usize {
    while index < s.len() && !s.is_char_boundary(index) {
        index += 1;
    }
    index
}
