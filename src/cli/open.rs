use std::path::PathBuf;

use crate::config;
use crate::editor;
use crate::error::Result;
use crate::journal;
use crate::models::LogDate;

/// Open the log for the given date, creating it first if absent.
///
/// Defaults to today when no date is given. The editor is launched
/// fire-and-forget; the process exits without waiting for it to close.
pub fn run(config_path: PathBuf, date: Option<String>) -> Result<()> {
    let config = config::load_or_init(&config_path)?;

    let date = LogDate::resolve(date.as_deref().unwrap_or(""))?;
    let path = journal::log_path(&config.root, &date)?;
    journal::ensure_log_file(&path, &date)?;

    editor::launch(&config.editor, &path)
}
