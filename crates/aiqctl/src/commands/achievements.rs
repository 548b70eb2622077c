//! Achievements commands - list unlocked badges, record new ones.

use anyhow::{Context, Result};

use aiq_core::MilestoneEngine;

use crate::display;
use crate::errors::EXIT_SUCCESS;

pub fn run(engine: &MilestoneEngine) -> Result<i32> {
    display::print_achievements(&engine.progress());
    Ok(EXIT_SUCCESS)
}

pub fn record(engine: &mut MilestoneEngine, id: &str, metadata: Option<&str>) -> Result<i32> {
    let metadata = metadata
        .map(|raw| serde_json::from_str(raw).context("metadata must be valid JSON"))
        .transpose()?;

    if engine.record_achievement(id, metadata) {
        println!("Badge {} recorded.", id);
    } else {
        println!("Badge {} was already unlocked.", id);
    }
    Ok(EXIT_SUCCESS)
}
