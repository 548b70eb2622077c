//! AI-Q Control - CLI for the documentation progress tracker.
//!
//! Thin shell around `aiq_core`: resolves the state file, wires the
//! terminal renderers onto the engine's broadcaster, dispatches the
//! subcommand, and appends one line to the invocation log.

mod cli;
mod commands;
mod display;
mod errors;
mod logging;

use anyhow::Result;
use clap::Parser;
use std::time::Instant;

use aiq_core::{MilestoneEngine, ProgressStore};

use cli::{Cli, Commands};
use logging::LogEntry;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr and only when RUST_LOG asks for them.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let started = Instant::now();
    let command = command_name(&cli.command).to_string();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            errors::EXIT_GENERAL_ERROR
        }
    };

    LogEntry {
        ts: LogEntry::now(),
        req_id: LogEntry::generate_req_id(),
        command,
        args,
        exit_code: code,
        duration_ms: started.elapsed().as_millis() as u64,
        ok: code == errors::EXIT_SUCCESS,
    }
    .write();

    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let store = match cli.state_file {
        Some(path) => ProgressStore::open(path),
        None => ProgressStore::open_default(),
    };

    let mut engine = MilestoneEngine::new(store);
    engine.subscribe(Box::new(display::UpdateLine));
    engine.subscribe(Box::new(display::CompletionBanner));

    match cli.command {
        Commands::Status { json } => commands::status::run(&engine, json),
        Commands::Path => commands::path::run(&engine),
        Commands::Complete {
            milestone,
            points,
            unlock,
        } => commands::complete::run(&mut engine, &milestone, points, unlock.as_deref()),
        Commands::Earn { amount, source } => {
            commands::provisional::earn(&mut engine, amount, &source)
        }
        Commands::Retract { amount } => commands::provisional::retract(&mut engine, amount),
        Commands::Commit { amount } => commands::provisional::commit(&mut engine, amount),
        Commands::Discard => commands::provisional::discard(&mut engine),
        Commands::Award { amount, source } => commands::award::run(&mut engine, amount, &source),
        Commands::Achievements => commands::achievements::run(&engine),
        Commands::Badge { id, metadata } => {
            commands::achievements::record(&mut engine, &id, metadata.as_deref())
        }
        Commands::Reset { yes } => commands::reset::run(&mut engine, yes),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Status { .. } => "status",
        Commands::Path => "path",
        Commands::Complete { .. } => "complete",
        Commands::Earn { .. } => "earn",
        Commands::Retract { .. } => "retract",
        Commands::Commit { .. } => "commit",
        Commands::Discard => "discard",
        Commands::Award { .. } => "award",
        Commands::Achievements => "achievements",
        Commands::Badge { .. } => "badge",
        Commands::Reset { .. } => "reset",
    }
}
