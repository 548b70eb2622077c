//! Command handlers, one module per subcommand family.

pub mod achievements;
pub mod award;
pub mod complete;
pub mod path;
pub mod provisional;
pub mod reset;
pub mod status;
