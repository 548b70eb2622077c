//! Complete command - finalize a milestone.

use anyhow::Result;
use owo_colors::OwoColorize;

use aiq_core::{LevelId, MilestoneCompletion, MilestoneEngine};

use crate::errors::{EXIT_ALREADY_COMPLETED, EXIT_SUCCESS, EXIT_UNKNOWN_LEVEL};

pub fn run(
    engine: &mut MilestoneEngine,
    milestone: &str,
    points: Option<u64>,
    unlock: Option<&str>,
) -> Result<i32> {
    let Some(level) = LevelId::parse(milestone) else {
        eprintln!("{} unknown level id: {}", "error:".red(), milestone);
        return Ok(EXIT_UNKNOWN_LEVEL);
    };

    let mut completion = MilestoneCompletion::new(level);
    if let Some(points) = points {
        completion = completion.with_points(points);
    }
    if let Some(unlock) = unlock {
        let Some(unlock) = LevelId::parse(unlock) else {
            eprintln!("{} unknown unlock target: {}", "error:".red(), unlock);
            return Ok(EXIT_UNKNOWN_LEVEL);
        };
        completion = completion.with_unlock(unlock);
    }

    if engine.complete_milestone(completion) {
        Ok(EXIT_SUCCESS)
    } else {
        println!("Milestone {} is already completed.", level);
        Ok(EXIT_ALREADY_COMPLETED)
    }
}
