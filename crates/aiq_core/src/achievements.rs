//! Achievement catalogue and evaluation.
//!
//! Achievements are sticky: once an id is in the record it stays there,
//! even if the underlying state would no longer qualify it. Evaluation
//! is a pure function over the record; the engine applies the result.

use std::collections::BTreeSet;

use crate::record::ProgressRecord;

// Threshold achievements granted automatically.
pub const IQ_100: &str = "iq_100";
pub const IQ_150: &str = "iq_150";
pub const HALF_WAY: &str = "half_way";
pub const MASTER: &str = "master";

// Recorded explicitly by the synthesis challenge flow.
pub const SYNTHESIS_CHALLENGE: &str = "completed_synthesis_challenge";

/// All known achievements as `(id, name, description)`.
///
/// The list is the source of truth for badge rendering; ids outside it
/// (recorded with free-form metadata) still display, just without a
/// catalogue name.
pub fn all_definitions() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        (
            IQ_100,
            "Τριψήφιο AI-Q",
            "Το AI-Q σας έφτασε το 100.",
        ),
        (
            IQ_150,
            "Διάνοια ΤΝ",
            "Το AI-Q σας έφτασε το 150.",
        ),
        (
            HALF_WAY,
            "Μισός Δρόμος",
            "Ολοκληρώσατε 5 επίπεδα της διαδρομής.",
        ),
        (
            MASTER,
            "Μάστερ",
            "Ολοκληρώσατε και τα 10 επίπεδα.",
        ),
        (
            SYNTHESIS_CHALLENGE,
            "Πρόκληση Σύνθεσης",
            "Υποβάλατε την πρώτη σας σύνθεση.",
        ),
    ]
}

/// Catalogue name for an id, when it has one.
pub fn display_name(id: &str) -> Option<&'static str> {
    all_definitions()
        .into_iter()
        .find(|(def_id, _, _)| *def_id == id)
        .map(|(_, name, _)| name)
}

/// Ids the current state qualifies for, threshold achievements only.
fn qualified(record: &ProgressRecord) -> Vec<&'static str> {
    let mut ids = Vec::new();
    if record.iq >= 100 {
        ids.push(IQ_100);
    }
    if record.iq >= 150 {
        ids.push(IQ_150);
    }
    if record.completed_levels.len() >= 5 {
        ids.push(HALF_WAY);
    }
    if record.completed_levels.len() >= 10 {
        ids.push(MASTER);
    }
    ids
}

/// Achievement ids that should be present: everything already held plus
/// everything newly qualified. Never removes a granted id.
pub fn evaluate(record: &ProgressRecord) -> BTreeSet<String> {
    let mut ids: BTreeSet<String> = record
        .achievements
        .iter()
        .map(|a| a.id.clone())
        .collect();
    for id in qualified(record) {
        ids.insert(id.to_string());
    }
    ids
}
