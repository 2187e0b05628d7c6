//! External editor launching
//!
//! Two launch modes: fire-and-forget for opening a day's log, and
//! wait-for-exit for editing the configuration file.

use std::path::Path;
use std::process::Command;

use crate::error::{Result, WmError};

/// Start the editor on a file and return without waiting for it to exit.
pub fn launch(editor: &str, path: &Path) -> Result<()> {
    Command::new(editor)
        .arg(path)
        .spawn()
        .map_err(|e| WmError::Editor(format!("failed to launch '{}': {}", editor, e)))?;
    Ok(())
}

/// Start the editor on a file and wait for it to exit.
///
/// A non-zero exit status is treated as a failed edit.
pub fn launch_and_wait(editor: &str, path: &Path) -> Result<()> {
    let status = Command::new(editor)
        .arg(path)
        .status()
        .map_err(|e| WmError::Editor(format!("failed to launch '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(WmError::Editor(format!(
            "'{}' exited with {}",
            editor, status
        )));
    }
    Ok(())
}
