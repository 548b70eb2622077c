//! Progress persistence.
//!
//! One JSON document per user, loaded once and written back after every
//! mutation. Reads degrade to defaults, writes degrade to a warning;
//! the in-memory record stays authoritative for the session either way,
//! so no caller ever has to handle a storage failure.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::AiqError;
use crate::paths;
use crate::record::ProgressRecord;

/// Owns the canonical in-memory record and its file location.
pub struct ProgressStore {
    path: PathBuf,
    record: ProgressRecord,
}

impl ProgressStore {
    /// Open the store at an explicit path, loading whatever is there.
    pub fn open(path: PathBuf) -> Self {
        let record = Self::load(&path);
        Self { path, record }
    }

    /// Open the store at the discovered default location. Falls back to
    /// a file in the current directory when no home is resolvable.
    pub fn open_default() -> Self {
        let path = paths::state_file().unwrap_or_else(|| PathBuf::from(paths::STATE_FILE));
        Self::open(path)
    }

    /// Read a record from disk. Absent or corrupt content yields
    /// defaults; the mandatory initial level is unioned in regardless
    /// of what was stored.
    pub fn load(path: &Path) -> ProgressRecord {
        let mut record = match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<ProgressRecord>(&content) {
                Ok(record) => record,
                Err(e) => {
                    warn!("corrupt progress record at {}: {}", path.display(), e);
                    ProgressRecord::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ProgressRecord::new(),
            Err(e) => {
                warn!("cannot read progress record at {}: {}", path.display(), e);
                ProgressRecord::new()
            }
        };
        record.ensure_initial_level();
        record
    }

    /// Stamp and persist the current record. Write failures are logged
    /// and swallowed; the in-memory record is left untouched by them.
    pub fn save(&mut self) {
        self.record.touch();
        if let Err(e) = self.try_save() {
            warn!("cannot save progress record at {}: {}", self.path.display(), e);
        } else {
            debug!("progress record saved to {}", self.path.display());
        }
    }

    fn try_save(&self) -> Result<(), AiqError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.record)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Read-only snapshot. Mutating the returned value does not affect
    /// stored state.
    pub fn get(&self) -> ProgressRecord {
        self.record.clone()
    }

    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    pub(crate) fn record_mut(&mut self) -> &mut ProgressRecord {
        &mut self.record
    }

    /// Replace the record wholesale (reset path).
    pub(crate) fn replace(&mut self, record: ProgressRecord) {
        self.record = record;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
