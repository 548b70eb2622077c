//! Provisional point commands: earn, retract, commit, discard.
//!
//! The reading loop buffers points here until the user either submits
//! a synthesis (commit) or walks away from it (discard).

use anyhow::Result;

use aiq_core::MilestoneEngine;

use crate::errors::EXIT_SUCCESS;

pub fn earn(engine: &mut MilestoneEngine, amount: u64, source: &str) -> Result<i32> {
    engine.add_provisional_points(amount, source);
    Ok(EXIT_SUCCESS)
}

pub fn retract(engine: &mut MilestoneEngine, amount: u64) -> Result<i32> {
    let removed = engine.retract_provisional_points(amount);
    if removed < amount {
        println!("Only {} provisional points were available.", removed);
    }
    Ok(EXIT_SUCCESS)
}

pub fn commit(engine: &mut MilestoneEngine, amount: Option<u64>) -> Result<i32> {
    let committed = engine.commit_provisional_points(amount);
    if committed == 0 {
        println!("Nothing to commit.");
    } else {
        println!("Committed {} points.", committed);
    }
    Ok(EXIT_SUCCESS)
}

pub fn discard(engine: &mut MilestoneEngine) -> Result<i32> {
    let cleared = engine.clear_provisional_points();
    if cleared == 0 {
        println!("Nothing to discard.");
    } else {
        println!("Discarded {} provisional points.", cleared);
    }
    Ok(EXIT_SUCCESS)
}
