//! Award command - direct committed points.

use anyhow::Result;

use aiq_core::MilestoneEngine;

use crate::errors::EXIT_SUCCESS;

pub fn run(engine: &mut MilestoneEngine, amount: u64, source: &str) -> Result<i32> {
    engine.add_points(amount, source);
    Ok(EXIT_SUCCESS)
}
