//! Core library for extracting flashcards from markdown notes and scheduling their review.
//!
//! Provides:
//! - Markdown card extraction over a notes directory
//! - Review state store with a simple ease-based scheduler
//! - Clock abstraction for deterministic scheduling
//! - Config (notes path, ignored decks) and aggregate review stats

pub mod clock;
pub mod config;
pub mod error;
pub mod parser;
pub mod stats;
pub mod store;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{ConfigError, Result, ScanError, StoreError};
pub use parser::{extract_cards, find_deck, scan_directory};
pub use stats::{DeckCounts, DueSummary};
pub use store::{card_key, ReviewStore};
pub use types::{Card, CardState, Rating};
