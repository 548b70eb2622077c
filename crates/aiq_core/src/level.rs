//! Level identifiers and the fixed unlock chain.
//!
//! The learning path is a straight line: `level_0` through `level_10`,
//! each completion unlocking the next. The successor map is total except
//! at the final level, which unlocks nothing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eleven fixed levels of the learning path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LevelId {
    #[serde(rename = "level_0")]
    Level0,
    #[serde(rename = "level_1")]
    Level1,
    #[serde(rename = "level_2")]
    Level2,
    #[serde(rename = "level_3")]
    Level3,
    #[serde(rename = "level_4")]
    Level4,
    #[serde(rename = "level_5")]
    Level5,
    #[serde(rename = "level_6")]
    Level6,
    #[serde(rename = "level_7")]
    Level7,
    #[serde(rename = "level_8")]
    Level8,
    #[serde(rename = "level_9")]
    Level9,
    #[serde(rename = "level_10")]
    Level10,
}

/// The level every fresh record starts with.
pub const INITIAL_LEVEL: LevelId = LevelId::Level0;

impl LevelId {
    /// All levels in path order.
    pub const ALL: [LevelId; 11] = [
        LevelId::Level0,
        LevelId::Level1,
        LevelId::Level2,
        LevelId::Level3,
        LevelId::Level4,
        LevelId::Level5,
        LevelId::Level6,
        LevelId::Level7,
        LevelId::Level8,
        LevelId::Level9,
        LevelId::Level10,
    ];

    /// Stable string form used in persisted records (`"level_3"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelId::Level0 => "level_0",
            LevelId::Level1 => "level_1",
            LevelId::Level2 => "level_2",
            LevelId::Level3 => "level_3",
            LevelId::Level4 => "level_4",
            LevelId::Level5 => "level_5",
            LevelId::Level6 => "level_6",
            LevelId::Level7 => "level_7",
            LevelId::Level8 => "level_8",
            LevelId::Level9 => "level_9",
            LevelId::Level10 => "level_10",
        }
    }

    /// Position in the path (0-based).
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|l| l == self).unwrap_or(0)
    }

    /// The level this one unlocks when completed. `None` at the end of
    /// the path.
    pub fn successor(&self) -> Option<LevelId> {
        let idx = self.index();
        Self::ALL.get(idx + 1).copied()
    }

    /// Parse a stored id. Unknown ids yield `None`; callers treat that as
    /// "skip the unlock step", never as a fatal error.
    pub fn parse(s: &str) -> Option<LevelId> {
        Self::ALL.iter().find(|l| l.as_str() == s).copied()
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LevelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown level id: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successor_chain() {
        assert_eq!(LevelId::Level0.successor(), Some(LevelId::Level1));
        assert_eq!(LevelId::Level9.successor(), Some(LevelId::Level10));
        assert_eq!(LevelId::Level10.successor(), None);
    }

    #[test]
    fn test_parse_roundtrip() {
        for level in LevelId::ALL {
            assert_eq!(LevelId::parse(level.as_str()), Some(level));
        }
        assert_eq!(LevelId::parse("level_11"), None);
        assert_eq!(LevelId::parse("garbage"), None);
    }

    #[test]
    fn test_index_ordering() {
        assert_eq!(LevelId::Level0.index(), 0);
        assert_eq!(LevelId::Level10.index(), 10);
        assert!(LevelId::Level3 < LevelId::Level7);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&LevelId::Level4).unwrap();
        assert_eq!(json, "\"level_4\"");
        let back: LevelId = serde_json::from_str("\"level_10\"").unwrap();
        assert_eq!(back, LevelId::Level10);
    }
}
