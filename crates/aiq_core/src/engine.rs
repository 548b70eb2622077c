//! Milestone engine - the single writer of the progress record.
//!
//! Every mutation follows the same shape: apply to the in-memory
//! record, re-evaluate achievements where points changed, persist,
//! then notify subscribers. Notification strictly follows persistence.

use serde::Serialize;
use tracing::debug;

use crate::achievements;
use crate::events::{Broadcaster, CompletionNotice, ProgressObserver, ProgressUpdate};
use crate::level::LevelId;
use crate::rank;
use crate::record::{AchievementEntry, ProgressRecord};
use crate::store::ProgressStore;

/// Points awarded when a completion carries no explicit value.
pub const DEFAULT_MILESTONE_POINTS: u64 = 5;

/// A milestone completion request. All knobs are explicit: the award
/// defaults to [`DEFAULT_MILESTONE_POINTS`] and the unlock target to
/// the milestone's fixed successor unless overridden.
#[derive(Debug, Clone, Copy)]
pub struct MilestoneCompletion {
    /// The milestone being finalized.
    pub milestone: LevelId,
    /// AI-Q points to award.
    pub points: u64,
    /// Unlock this level instead of the fixed successor.
    pub unlock: Option<LevelId>,
}

impl MilestoneCompletion {
    pub fn new(milestone: LevelId) -> Self {
        Self {
            milestone,
            points: DEFAULT_MILESTONE_POINTS,
            unlock: None,
        }
    }

    pub fn with_points(mut self, points: u64) -> Self {
        self.points = points;
        self
    }

    pub fn with_unlock(mut self, unlock: LevelId) -> Self {
        self.unlock = Some(unlock);
        self
    }
}

/// Record plus its derived projections, for display and debugging.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    #[serde(flatten)]
    pub record: ProgressRecord,
    pub rank: &'static str,
    pub bar_percentage: f64,
}

/// Applies point awards and level unlocks to the store, keeping
/// achievements, persistence and notifications in lockstep.
pub struct MilestoneEngine {
    store: ProgressStore,
    broadcaster: Broadcaster,
}

impl MilestoneEngine {
    pub fn new(store: ProgressStore) -> Self {
        Self {
            store,
            broadcaster: Broadcaster::new(),
        }
    }

    /// Register a renderer for progress updates.
    pub fn subscribe(&mut self, observer: Box<dyn ProgressObserver>) {
        self.broadcaster.subscribe(observer);
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    /// Read-only snapshot of the raw record.
    pub fn progress(&self) -> ProgressRecord {
        self.store.get()
    }

    /// Record plus rank and bar projections.
    pub fn snapshot(&self) -> ProgressSnapshot {
        let record = self.store.get();
        let rank = rank::current_rank(record.iq);
        let bar_percentage =
            rank::bar_percentage(record.iq, rank::IQ_BAR_MIN, rank::IQ_BAR_MAX);
        ProgressSnapshot {
            record,
            rank,
            bar_percentage,
        }
    }

    /// Finalize a milestone. Returns false without touching any state
    /// when the milestone was already completed; a milestone can be
    /// completed at most once.
    pub fn complete_milestone(&mut self, completion: MilestoneCompletion) -> bool {
        let id = completion.milestone;
        if self.store.record().is_completed(id) {
            debug!("milestone {} already completed", id);
            return false;
        }

        let record = self.store.record_mut();
        record.iq = record.iq.saturating_add(completion.points);
        record.total_points = record.total_points.saturating_add(completion.points);
        record.completed_levels.insert(id.as_str().to_string());

        // Unlock target: explicit override, else the fixed successor.
        // Nothing to unlock at the end of the path.
        let target = completion.unlock.or_else(|| id.successor());
        let unlocked = match target {
            Some(level) if !record.is_unlocked(level) => {
                record.unlocked_levels.insert(level.as_str().to_string());
                Some(level)
            }
            _ => None,
        };

        self.refresh_achievements();
        self.store.save();
        self.publish();

        let notice = CompletionNotice {
            milestone: id,
            points: completion.points,
            new_iq: self.store.record().iq,
            unlocked,
        };
        self.broadcaster.announce_completion(&notice);
        true
    }

    /// Add tentative points. They do not count toward the score until
    /// committed.
    pub fn add_provisional_points(&mut self, amount: u64, source: &str) {
        debug!("+{} provisional points from {}", amount, source);
        let record = self.store.record_mut();
        record.provisional_points = record.provisional_points.saturating_add(amount);
        self.store.save();
        self.publish();
    }

    /// Take back tentative points, floored at zero. Returns the amount
    /// actually removed.
    pub fn retract_provisional_points(&mut self, amount: u64) -> u64 {
        let record = self.store.record_mut();
        let removed = amount.min(record.provisional_points);
        if removed == 0 {
            return 0;
        }
        record.provisional_points -= removed;
        self.store.save();
        self.publish();
        removed
    }

    /// Commit tentative points into the score: the explicit amount
    /// (capped at the balance) or, with `None`, the whole balance.
    /// Returns the amount actually committed.
    pub fn commit_provisional_points(&mut self, amount: Option<u64>) -> u64 {
        let record = self.store.record_mut();
        let committed = amount
            .unwrap_or(record.provisional_points)
            .min(record.provisional_points);
        if committed == 0 {
            return 0;
        }
        record.provisional_points -= committed;
        record.iq = record.iq.saturating_add(committed);
        record.total_points = record.total_points.saturating_add(committed);

        self.refresh_achievements();
        self.store.save();
        self.publish();
        committed
    }

    /// Discard the tentative balance without scoring it. Returns what
    /// was discarded.
    pub fn clear_provisional_points(&mut self) -> u64 {
        let record = self.store.record_mut();
        let cleared = record.provisional_points;
        if cleared == 0 {
            return 0;
        }
        record.provisional_points = 0;
        self.store.save();
        self.publish();
        cleared
    }

    /// Add committed points directly, bypassing the provisional buffer.
    pub fn add_points(&mut self, amount: u64, source: &str) {
        debug!("+{} points from {}", amount, source);
        let record = self.store.record_mut();
        record.iq = record.iq.saturating_add(amount);
        record.total_points = record.total_points.saturating_add(amount);

        self.refresh_achievements();
        self.store.save();
        self.publish();
    }

    /// Idempotent append of an achievement with optional context.
    /// Returns false when the id was already granted, in either the
    /// legacy or the structured form.
    pub fn record_achievement(&mut self, id: &str, metadata: Option<serde_json::Value>) -> bool {
        if self.store.record().has_achievement(id) {
            return false;
        }
        self.store
            .record_mut()
            .achievements
            .push(AchievementEntry::new(id, metadata));
        self.store.save();
        self.publish();
        true
    }

    /// Wipe everything back to defaults and persist immediately.
    pub fn reset(&mut self) {
        self.store.replace(ProgressRecord::new());
        self.store.save();
        self.publish();
    }

    /// Grant every achievement the current state qualifies for. Granted
    /// ids are never taken away.
    fn refresh_achievements(&mut self) {
        let record = self.store.record_mut();
        let target = achievements::evaluate(record);
        for id in target {
            if !record.has_achievement(&id) {
                record.achievements.push(AchievementEntry::new(&id, None));
            }
        }
    }

    fn publish(&mut self) {
        let update = ProgressUpdate::from_record(self.store.record());
        self.broadcaster.publish(&update);
    }
}
