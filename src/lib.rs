//! taara-admin library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (store, state, records, renderers).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod render;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Seed => commands::seed::handle(cfg),
        Commands::Dashboard => commands::dashboard::handle(cfg),
        Commands::Adoption { action } => commands::adoption::handle(action, cfg),
        Commands::Rescue { action } => commands::rescue::handle(action, cfg),
        Commands::Donation { action } => commands::donation::handle(action, cfg),
        Commands::Event { action } => commands::event::handle(action, cfg),
        Commands::Due { action } => commands::due::handle(action, cfg),
        Commands::Calendar { action } => commands::calendar::handle(action, cfg),
        Commands::Charts { .. } => commands::charts::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Import { .. } => commands::import::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
