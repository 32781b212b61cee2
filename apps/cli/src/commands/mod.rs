//! Command implementations.

pub mod config;
pub mod due;
pub mod list;
pub mod review;

use anyhow::{anyhow, Context as _, Result};
use notecards_core::store::default_state_path;
use notecards_core::{scan_directory, Card, Config, ReviewStore};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::Cli;

/// Config and file locations shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    pub state_path: PathBuf,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Self {
        let config_path = cli.config_file.clone().unwrap_or_else(Config::default_path);
        let state_path = cli.state.clone().unwrap_or_else(default_state_path);
        Self {
            config: Config::load_from(&config_path),
            config_path,
            state_path,
        }
    }

    /// Notes directory from the argument or the config.
    pub fn notes_path(&self, arg: Option<&Path>) -> Result<PathBuf> {
        self.config.resolve_notes_path(arg).ok_or_else(|| {
            anyhow!(
                "no path provided and no notes_path in config; set it in {} or pass a path argument",
                self.config_path.display()
            )
        })
    }

    /// Every card under the notes directory, ignored decks included.
    pub fn scan_all(&self, arg: Option<&Path>) -> Result<Vec<Card>> {
        let root = self.notes_path(arg)?;
        let cards = scan_directory(&root).context("failed to scan notes")?;
        info!(root = %root.display(), cards = cards.len(), "scanned notes");
        Ok(cards)
    }

    /// Cards under the notes directory, minus ignored decks.
    pub fn load_cards(&self, arg: Option<&Path>) -> Result<Vec<Card>> {
        let mut cards = self.scan_all(arg)?;
        cards.retain(|card| !self.config.is_deck_ignored(&card.deck));
        Ok(cards)
    }

    pub fn load_store(&self) -> Result<ReviewStore> {
        ReviewStore::load(&self.state_path).context("failed to load review state")
    }
}
