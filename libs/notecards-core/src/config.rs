//! User configuration: where the notes live and which decks to leave out.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_decks: Vec<String>,
}

impl Config {
    /// Default location of the config file, under the user's config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notecards")
            .join("config.json")
    }

    /// Load config from `path`. A missing or unreadable file gives the default config.
    pub fn load_from(path: &Path) -> Self {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    warn!(path = %path.display(), error = %err, "cannot read config, using defaults");
                }
                return Self::default();
            }
        };

        serde_json::from_str(&data).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            Self::default()
        })
    }

    /// Write config to `path` as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data).map_err(write_err)
    }

    /// The explicit argument if given, else the configured notes path.
    pub fn resolve_notes_path(&self, arg: Option<&Path>) -> Option<PathBuf> {
        arg.map(Path::to_path_buf).or_else(|| self.notes_path.clone())
    }

    /// True if `deck` or one of its parent decks is in the ignore list.
    ///
    /// `leetcode` ignores `leetcode` and `leetcode.dp.tasks`, but not `leetcodex`.
    pub fn is_deck_ignored(&self, deck: &str) -> bool {
        self.ignore_decks
            .iter()
            .any(|pattern| deck_matches(deck, pattern))
    }

    /// Add `deck` to the ignore list. Returns false if it was already there.
    pub fn ignore_deck(&mut self, deck: &str) -> bool {
        if self.ignore_decks.iter().any(|d| d == deck) {
            return false;
        }
        self.ignore_decks.push(deck.to_string());
        self.ignore_decks.sort();
        true
    }

    /// Remove `deck` from the ignore list. Returns false if it was not there.
    pub fn unignore_deck(&mut self, deck: &str) -> bool {
        let before = self.ignore_decks.len();
        self.ignore_decks.retain(|d| d != deck);
        self.ignore_decks.len() != before
    }
}

/// True if `deck` is `pattern` or nested under it.
pub fn deck_matches(deck: &str, pattern: &str) -> bool {
    deck.strip_prefix(pattern)
        .map_or(false, |rest| rest.is_empty() || rest.starts_with('.'))
}
