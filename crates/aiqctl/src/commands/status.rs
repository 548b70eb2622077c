//! Status command - the dashboard projection of the record.

use anyhow::Result;

use aiq_core::MilestoneEngine;

use crate::display;
use crate::errors::EXIT_SUCCESS;

pub fn run(engine: &MilestoneEngine, json: bool) -> Result<i32> {
    let snapshot = engine.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        display::print_status(&snapshot);
    }
    Ok(EXIT_SUCCESS)
}
