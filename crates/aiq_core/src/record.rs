//! The persisted progress record.
//!
//! One record per user, stored as a single JSON document. The wire
//! format is shared with the website build that wrote records before
//! this crate existed, so field names stay camelCase, the score key
//! stays `iq`, and the achievements list accepts both the legacy
//! bare-string form and the structured form. Missing fields fill in
//! from defaults on load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::level::{LevelId, INITIAL_LEVEL};

/// AI-Q score every fresh record starts with.
pub const INITIAL_IQ: u64 = 85;

/// A single unlocked achievement.
///
/// Legacy records stored achievements as bare id strings; newer records
/// store `{id, timestamp, metadata}`. Deserialization accepts both and
/// normalizes to this structured form, so a re-save upgrades the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementEntry {
    /// Stable identifier, e.g. `"iq_100"`.
    pub id: String,
    /// When the achievement was unlocked. Unknown for entries upgraded
    /// from the legacy form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Free-form context captured at unlock time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl AchievementEntry {
    /// Entry unlocked right now.
    pub fn new(id: &str, metadata: Option<serde_json::Value>) -> Self {
        Self {
            id: id.to_string(),
            timestamp: Some(Utc::now()),
            metadata,
        }
    }

    /// Entry upgraded from a legacy bare id; no timestamp is known.
    pub fn bare(id: &str) -> Self {
        Self {
            id: id.to_string(),
            timestamp: None,
            metadata: None,
        }
    }
}

impl<'de> Deserialize<'de> for AchievementEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bare(String),
            Detailed {
                id: String,
                #[serde(default)]
                timestamp: Option<DateTime<Utc>>,
                #[serde(default)]
                metadata: Option<serde_json::Value>,
            },
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Bare(id) => AchievementEntry::bare(&id),
            Raw::Detailed {
                id,
                timestamp,
                metadata,
            } => AchievementEntry {
                id,
                timestamp,
                metadata,
            },
        })
    }
}

/// Render state of a level card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardState {
    Locked,
    Unlocked,
    Completed,
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardState::Locked => write!(f, "Κλειδωμένο"),
            CardState::Unlocked => write!(f, "Διαθέσιμο"),
            CardState::Completed => write!(f, "Ολοκληρώθηκε"),
        }
    }
}

/// The canonical progress aggregate.
///
/// Level sets are kept string-typed: records written by older site
/// versions can contain ids outside the current path, and those must
/// survive a load/save round-trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    /// Cumulative AI-Q score.
    pub iq: u64,
    /// Levels reachable by the user. Always contains the initial level.
    pub unlocked_levels: BTreeSet<String>,
    /// Levels finalized by the user, each at most once.
    pub completed_levels: BTreeSet<String>,
    /// Lifetime sum of committed point awards.
    pub total_points: u64,
    /// Points earned but not yet committed.
    pub provisional_points: u64,
    /// Achievements unlocked so far, append-only.
    pub achievements: Vec<AchievementEntry>,
    /// Epoch millis of the last mutation.
    pub last_updated: i64,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        let mut unlocked = BTreeSet::new();
        unlocked.insert(INITIAL_LEVEL.as_str().to_string());
        Self {
            iq: INITIAL_IQ,
            unlocked_levels: unlocked,
            completed_levels: BTreeSet::new(),
            total_points: 0,
            provisional_points: 0,
            achievements: Vec::new(),
            last_updated: Utc::now().timestamp_millis(),
        }
    }
}

impl ProgressRecord {
    /// Fresh record with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Union the mandatory initial level into the unlocked set. Applied
    /// after every load regardless of stored content.
    pub fn ensure_initial_level(&mut self) {
        self.unlocked_levels
            .insert(INITIAL_LEVEL.as_str().to_string());
    }

    /// Stamp the mutation time.
    pub fn touch(&mut self) {
        self.last_updated = Utc::now().timestamp_millis();
    }

    pub fn is_unlocked(&self, level: LevelId) -> bool {
        self.unlocked_levels.contains(level.as_str())
    }

    pub fn is_completed(&self, level: LevelId) -> bool {
        self.completed_levels.contains(level.as_str())
    }

    /// Completed beats unlocked beats locked.
    pub fn card_state(&self, level: LevelId) -> CardState {
        if self.is_completed(level) {
            CardState::Completed
        } else if self.is_unlocked(level) {
            CardState::Unlocked
        } else {
            CardState::Locked
        }
    }

    /// Whether an achievement id has been granted, in either storage form.
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == id)
    }

    /// Ids of all granted achievements, in unlock order.
    pub fn achievement_ids(&self) -> Vec<&str> {
        self.achievements.iter().map(|a| a.id.as_str()).collect()
    }
}
