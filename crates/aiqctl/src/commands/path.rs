//! Path command - level cards for the whole learning path.

use anyhow::Result;

use aiq_core::MilestoneEngine;

use crate::display;
use crate::errors::EXIT_SUCCESS;

pub fn run(engine: &MilestoneEngine) -> Result<i32> {
    display::print_path(&engine.progress());
    Ok(EXIT_SUCCESS)
}
