//! Logging for aiqctl operations
//!
//! XDG-compliant invocation log with fallback chain. One JSON line per
//! invocation; failures to log never disturb command output.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;

/// Log entry for each aiqctl invocation
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 timestamp
    pub ts: String,

    /// Request ID (UUID)
    pub req_id: String,

    /// Command name
    pub command: String,

    /// Command arguments
    #[serde(default)]
    pub args: Vec<String>,

    /// Exit code
    pub exit_code: i32,

    /// Duration in milliseconds
    pub duration_ms: u64,

    /// Success flag
    pub ok: bool,
}

impl LogEntry {
    /// Discover log file path with fallback chain
    ///
    /// Priority:
    /// 1. $AIQCTL_LOG_FILE environment variable (explicit override)
    /// 2. $XDG_STATE_HOME/aiq/ctl.jsonl (XDG standard)
    /// 3. ~/.local/state/aiq/ctl.jsonl (XDG fallback)
    fn discover_log_path() -> Option<String> {
        // 1. Explicit override
        if let Ok(path) = std::env::var("AIQCTL_LOG_FILE") {
            return Some(path);
        }

        // 2. XDG_STATE_HOME
        if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
            return Some(format!("{}/aiq/ctl.jsonl", xdg_state));
        }

        // 3. HOME/.local/state fallback
        if let Ok(home) = std::env::var("HOME") {
            return Some(format!("{}/.local/state/aiq/ctl.jsonl", home));
        }

        None
    }

    /// Write the entry to the log file. Failures are dropped so the
    /// command's own stdout/stderr stay clean.
    pub fn write(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(_) => return,
        };

        if let Some(path) = Self::discover_log_path() {
            if let Err(e) = Self::write_to_file(&json, &path) {
                tracing::debug!("invocation log write failed: {}", e);
            }
        }
    }

    /// Attempt to write log entry to file
    fn write_to_file(json: &str, path: &str) -> Result<(), std::io::Error> {
        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        writeln!(file, "{}", json)?;
        Ok(())
    }

    /// Generate request ID
    pub fn generate_req_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Get current timestamp in ISO 8601 format
    pub fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_to_one_line() {
        let entry = LogEntry {
            ts: LogEntry::now(),
            req_id: LogEntry::generate_req_id(),
            command: "status".to_string(),
            args: vec!["--json".to_string()],
            exit_code: 0,
            duration_ms: 4,
            ok: true,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"command\":\"status\""));
    }
}
