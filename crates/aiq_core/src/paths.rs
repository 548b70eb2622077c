//! State file discovery.
//!
//! Fallback chain, never root-owned locations:
//! 1. `$AIQ_STATE_FILE` (explicit override, used heavily by tests)
//! 2. `$XDG_STATE_HOME/aiq/aiq_progress.json`
//! 3. `~/.local/state/aiq/aiq_progress.json`

use std::path::PathBuf;

/// File name of the single progress record.
pub const STATE_FILE: &str = "aiq_progress.json";

/// Directory holding tracker state, before the override is considered.
pub fn state_dir() -> Option<PathBuf> {
    if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
        if !xdg_state.is_empty() {
            return Some(PathBuf::from(xdg_state).join("aiq"));
        }
    }
    dirs::home_dir().map(|home| home.join(".local/state/aiq"))
}

/// Resolve the progress file path through the fallback chain.
pub fn state_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("AIQ_STATE_FILE") {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    state_dir().map(|dir| dir.join(STATE_FILE))
}
