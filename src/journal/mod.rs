//! Log file layout module
//!
//! Maps a calendar date to its on-disk path ({root}/{year}/{month}/{day}.txt,
//! no zero-padding) and creates missing log files seeded with a header.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WmError};
use crate::models::LogDate;

/// Expand a leading `~` in the configured root to the user's home directory.
pub fn expand_root(root: &str) -> Result<PathBuf> {
    match root.strip_prefix('~') {
        Some(rest) => {
            let home = dirs::home_dir().ok_or_else(|| {
                WmError::Environment(
                    "cannot resolve the current user's home directory".to_string(),
                )
            })?;
            let rest = rest.trim_start_matches(['/', '\\']);
            if rest.is_empty() {
                Ok(home)
            } else {
                Ok(home.join(rest))
            }
        }
        None => Ok(PathBuf::from(root)),
    }
}

/// Build the log file path for a date under the configured root.
pub fn log_path(root: &str, date: &LogDate) -> Result<PathBuf> {
    let mut path = expand_root(root)?;
    path.push(date.year.to_string());
    path.push(date.month.to_string());
    path.push(format!("{}.txt", date.day));
    Ok(path)
}

/// Create the log file and its parent directories if absent.
///
/// New files are seeded with a header naming the date; existing files are
/// never touched.
pub fn ensure_log_file(path: &Path, date: &LogDate) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| WmError::File {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    if path.exists() {
        return Ok(());
    }

    let header = format!(
        "Working Memory File\n{}/{}/{}\n-------------------\n\n",
        date.month, date.day, date.year
    );
    fs::write(path, header).map_err(|e| WmError::File {
        path: path.to_path_buf(),
        source: e,
    })
}
