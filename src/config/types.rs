use serde::{Deserialize, Serialize};

/// Wm configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory under which daily logs are stored
    pub root: String,

    /// Program used to open log files
    pub editor: String,

    /// Characters of context shown either side of a search match
    pub context_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: "~/.wm/logs".to_string(),
            editor: default_editor().to_string(),
            context_size: 200,
        }
    }
}

fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}
