use std::path::PathBuf;

use crate::config;
use crate::editor;
use crate::error::Result;

/// Open the configuration file for editing and wait until the editor
/// exits. The file is created with defaults first if absent.
pub fn run(config_path: PathBuf) -> Result<()> {
    let config = config::load_or_init(&config_path)?;
    editor::launch_and_wait(&config.editor, &config_path)
}
