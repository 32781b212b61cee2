//! Shared fixtures for CLI integration tests.
//!
//! Provides a temporary notes tree, a frozen clock, and a `Context` pointing at temporary
//! config and state files.

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use notecards_core::{Config, FixedClock, ReviewStore};
use notecards_cli::commands::Context;
use tempfile::TempDir;

/// Temporary directory holding a notes tree plus config and state files.
pub struct TestNotes {
    dir: TempDir,
}

impl TestNotes {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(dir.path().join("notes")).expect("create notes dir");
        Self { dir }
    }

    pub fn notes_path(&self) -> PathBuf {
        self.dir.path().join("notes")
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("data/state.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config/config.json")
    }

    /// Write a note relative to the notes root.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.notes_path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create note dir");
        }
        fs::write(&path, content).expect("write note");
        path
    }

    /// Context with the notes path configured and the given ignore list.
    pub fn context(&self, ignore_decks: &[&str]) -> Context {
        Context {
            config: Config {
                notes_path: Some(self.notes_path()),
                ignore_decks: ignore_decks.iter().map(|d| d.to_string()).collect(),
            },
            config_path: self.config_path(),
            state_path: self.state_path(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Noon on a fixed local date.
pub fn noon() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
        .single()
        .expect("valid local time")
}

/// Empty store with a frozen clock, bound to `path`.
pub fn frozen_store(path: impl Into<PathBuf>) -> ReviewStore<FixedClock> {
    ReviewStore::new(path, FixedClock(noon()))
}
