//! Command-line driver for notecards: review due cards, print due counts for status bars,
//! list decks, and edit the config.

pub mod cli;
pub mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command, ConfigAction};
use crate::commands::Context;

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = Context::from_cli(&cli);

    match &cli.command {
        Command::Review { path, decks } => commands::review::run(&ctx, path.as_deref(), decks),
        Command::Due {
            path,
            format,
            json,
            by_deck,
        } => {
            let format = cli::effective_due_format(*format, *json, *by_deck);
            commands::due::run(&ctx, path.as_deref(), format)
        }
        Command::List { path } => commands::list::run(&ctx, path.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::Show { path } => commands::config::show(&ctx, path.as_deref()),
            ConfigAction::Ignore { deck } => commands::config::ignore(ctx, deck),
            ConfigAction::Unignore { deck } => commands::config::unignore(ctx, deck),
            ConfigAction::SetPath { path } => commands::config::set_path(ctx, path),
        },
    }
}
