//! Progress change notifications.
//!
//! The engine is the only writer; everything that renders progress
//! (dashboard, level cards, doodler pens, typography) subscribes here
//! and re-renders on its own. Updates are published after a mutation
//! has been applied and persisted, never before.

use serde::{Deserialize, Serialize};

use crate::level::LevelId;
use crate::rank;
use crate::record::ProgressRecord;

/// Snapshot of the values renderers key off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    /// Current AI-Q score.
    pub iq: u64,
    /// Rank label for the score.
    pub rank: String,
    /// Lifetime committed points.
    pub total_points: u64,
    /// Points pending commitment.
    pub provisional_points: u64,
}

impl ProgressUpdate {
    pub fn from_record(record: &ProgressRecord) -> Self {
        Self {
            iq: record.iq,
            rank: rank::current_rank(record.iq).to_string(),
            total_points: record.total_points,
            provisional_points: record.provisional_points,
        }
    }
}

/// Transient signal fired once per successful milestone completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionNotice {
    /// The milestone that was just finalized.
    pub milestone: LevelId,
    /// Points awarded for it.
    pub points: u64,
    /// Score after the award.
    pub new_iq: u64,
    /// Level unlocked by the completion, if any.
    pub unlocked: Option<LevelId>,
}

/// A renderer interested in progress changes.
///
/// `on_update` fires after every persisted mutation; `on_completion`
/// only when a milestone is finalized, for one-shot celebration
/// displays. Implementations must not call back into the engine.
pub trait ProgressObserver {
    fn on_update(&mut self, update: &ProgressUpdate);

    fn on_completion(&mut self, _notice: &CompletionNotice) {}
}

/// Fan-out point between the engine and its renderers.
#[derive(Default)]
pub struct Broadcaster {
    observers: Vec<Box<dyn ProgressObserver>>,
}

impl Broadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer. Observers are notified in subscription order.
    pub fn subscribe(&mut self, observer: Box<dyn ProgressObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn publish(&mut self, update: &ProgressUpdate) {
        for observer in &mut self.observers {
            observer.on_update(update);
        }
    }

    pub fn announce_completion(&mut self, notice: &CompletionNotice) {
        for observer in &mut self.observers {
            observer.on_completion(notice);
        }
    }
}
