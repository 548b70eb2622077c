//! AI-Q Core - progress tracking for the AI Director documentation site.
//!
//! The gamified reading loop in one crate: a persisted progress record
//! (score, unlocked/completed levels, provisional points, achievements),
//! the milestone engine that mutates it, and the pure projections the
//! renderers key off (rank bands, bar fill, card states, stroke tiers).
//!
//! Single-threaded by design: mutations are synchronous, applied to one
//! in-memory record, persisted, and only then broadcast to observers.

pub mod achievements;
pub mod engine;
pub mod error;
pub mod events;
pub mod level;
pub mod path;
pub mod paths;
pub mod rank;
pub mod record;
pub mod store;
pub mod style;

pub use engine::{MilestoneCompletion, MilestoneEngine, ProgressSnapshot, DEFAULT_MILESTONE_POINTS};
pub use error::AiqError;
pub use events::{Broadcaster, CompletionNotice, ProgressObserver, ProgressUpdate};
pub use level::{LevelId, INITIAL_LEVEL};
pub use record::{AchievementEntry, CardState, ProgressRecord, INITIAL_IQ};
pub use store::ProgressStore;
