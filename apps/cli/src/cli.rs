//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "notecards", version, about = "Spaced-repetition review of flashcards kept in markdown notes")]
pub struct Cli {
    /// Review state file [default: <data dir>/notecards/state.json]
    #[arg(long, global = true, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Config file [default: <config dir>/notecards/config.json]
    #[arg(long = "config-file", global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Review due cards interactively
    Review {
        /// Notes directory (optional if notes_path is configured)
        path: Option<PathBuf>,

        /// Only review this deck and its sub-decks (repeatable)
        #[arg(long = "deck", value_name = "DECK")]
        decks: Vec<String>,
    },

    /// Print the number of due cards; exits with status 1 when nothing is due
    Due {
        /// Notes directory (optional if notes_path is configured)
        path: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = DueFormat::Plain)]
        format: DueFormat,

        /// Shorthand for --format json
        #[arg(long)]
        json: bool,

        /// Shorthand for --format by-deck
        #[arg(long)]
        by_deck: bool,
    },

    /// List decks with card and due counts
    List {
        /// Notes directory (optional if notes_path is configured)
        path: Option<PathBuf>,
    },

    /// Show or edit the config
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the config and every deck found in the notes
    Show {
        /// Notes directory (optional if notes_path is configured)
        path: Option<PathBuf>,
    },
    /// Leave a deck and its sub-decks out of reviews and counts
    Ignore { deck: String },
    /// Stop ignoring a deck
    Unignore { deck: String },
    /// Set the default notes directory
    SetPath { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DueFormat {
    /// Total due count
    Plain,
    /// Full stats as JSON
    Json,
    /// Due count with new/overdue breakdown
    Polybar,
    /// Due counts per deck
    ByDeck,
}

/// Resolve `--json` and `--by-deck` shorthands against `--format`.
pub fn effective_due_format(format: DueFormat, json: bool, by_deck: bool) -> DueFormat {
    if json {
        DueFormat::Json
    } else if by_deck {
        DueFormat::ByDeck
    } else {
        format
    }
}
