//! Reset command - wipe progress back to defaults.

use anyhow::Result;
use owo_colors::OwoColorize;

use aiq_core::MilestoneEngine;

use crate::errors::{EXIT_GENERAL_ERROR, EXIT_SUCCESS};

pub fn run(engine: &mut MilestoneEngine, yes: bool) -> Result<i32> {
    if !yes {
        eprintln!(
            "{} this wipes all progress; re-run with --yes to confirm",
            "refusing:".yellow()
        );
        return Ok(EXIT_GENERAL_ERROR);
    }
    engine.reset();
    println!("Progress reset to defaults.");
    Ok(EXIT_SUCCESS)
}
