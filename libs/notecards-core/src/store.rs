//! Review state store.
//!
//! Maps a key derived from each card's question text to its scheduling state, and persists
//! the whole map as one JSON file. Entries are created on first rating and never removed, so
//! cards deleted from the notes leave their state behind.
//!
//! The file is rewritten in full on [`ReviewStore::save`]. There is no locking: two processes
//! saving the same file concurrently can lose each other's updates.

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, StoreError};
use crate::types::{CardState, Rating};
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const KEY_BYTES: usize = 16;
const HARD_EASE_PENALTY: f64 = 0.15;
const EASY_EASE_BONUS: f64 = 0.15;
const EASY_INTERVAL_BONUS: f64 = 1.3;

/// Key under which a card's state is stored: hex of the first 16 bytes of SHA-256(question).
pub fn card_key(question: &str) -> String {
    let digest = Sha256::digest(question.as_bytes());
    hex::encode(&digest[..KEY_BYTES])
}

/// Default location of the state file, under the user's data directory.
pub fn default_state_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("notecards")
        .join("state.json")
}

/// Scheduling state for every rated card, bound to its backing file.
#[derive(Debug)]
pub struct ReviewStore<C = SystemClock> {
    cards: BTreeMap<String, CardState>,
    path: PathBuf,
    clock: C,
}

impl ReviewStore<SystemClock> {
    /// Load the store at `path` using the wall clock.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        Self::load_with_clock(path, SystemClock)
    }
}

impl<C: Clock> ReviewStore<C> {
    /// Empty store bound to `path`. Nothing is read or written.
    pub fn new(path: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            cards: BTreeMap::new(),
            path: path.into(),
            clock,
        }
    }

    /// Load the store at `path`. A missing file gives an empty store.
    pub fn load_with_clock(path: impl Into<PathBuf>, clock: C) -> Result<Self> {
        let path = path.into();

        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no state file, starting empty");
                return Ok(Self::new(path, clock));
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        let cards: BTreeMap<String, CardState> = match serde_json::from_str(&data) {
            Ok(cards) => cards,
            Err(source) => return Err(StoreError::Corrupt { path, source }),
        };

        info!(path = %path.display(), cards = cards.len(), "loaded review state");
        Ok(Self { cards, path, clock })
    }

    /// Write the full mapping to the bound path, creating parent directories.
    ///
    /// The data goes to a sibling temporary file first and is then renamed over the target.
    pub fn save(&self) -> Result<()> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(write_err)?;
        }

        let data = serde_json::to_string_pretty(&self.cards)?;
        let tmp_path = temp_path(&self.path);
        fs::write(&tmp_path, data).map_err(write_err)?;
        fs::rename(&tmp_path, &self.path).map_err(write_err)?;

        info!(path = %self.path.display(), cards = self.cards.len(), "saved review state");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of cards with stored state.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Stored state for `question`, keyed by [`card_key`].
    pub fn entry(&self, question: &str) -> Option<&CardState> {
        self.cards.get(&card_key(question))
    }

    /// Current state, or the default for a card that was never rated.
    ///
    /// The default is not inserted.
    pub fn state(&self, question: &str) -> CardState {
        self.entry(question).cloned().unwrap_or_default()
    }

    /// Replace the stored state for `question`.
    pub fn set_state(&mut self, question: &str, state: CardState) {
        self.cards.insert(card_key(question), state);
    }

    pub fn is_due(&self, question: &str) -> bool {
        self.now() >= self.state(question).next_review
    }

    /// True if the card was never rated.
    pub fn is_new(&self, question: &str) -> bool {
        self.entry(question).is_none()
    }

    /// True if the card was due more than a day ago. Never-rated cards are not overdue.
    pub fn is_overdue(&self, question: &str) -> bool {
        self.entry(question)
            .and_then(|state| state.next_review.checked_add_signed(Duration::hours(24)))
            .map_or(false, |limit| self.now() > limit)
    }

    /// Apply a rating and reschedule the card.
    pub fn rate(&mut self, question: &str, rating: Rating) {
        let mut state = self.state(question);

        if state.interval == 0 {
            state.interval = 1;
            state.ease_factor = CardState::INITIAL_EASE;
        }

        match rating {
            Rating::Hard => {
                state.ease_factor =
                    (state.ease_factor - HARD_EASE_PENALTY).max(CardState::MINIMUM_EASE);
            }
            Rating::Good => {
                state.interval = whole_days(f64::from(state.interval) * state.ease_factor);
            }
            Rating::Easy => {
                state.interval = whole_days(
                    f64::from(state.interval) * state.ease_factor * EASY_INTERVAL_BONUS,
                );
                state.ease_factor += EASY_EASE_BONUS;
            }
        }

        let now = self.now();
        state.next_review = now
            .checked_add_signed(Duration::days(i64::from(state.interval)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        state.last_reviewed = Some(now);

        debug!(?rating, interval = state.interval, ease = state.ease_factor, "rated card");
        self.cards.insert(card_key(question), state);
    }

    /// Number of `questions` currently due.
    pub fn due_count<'a>(&self, questions: impl IntoIterator<Item = &'a str>) -> usize {
        questions.into_iter().filter(|q| self.is_due(q)).count()
    }

    /// Number of `questions` last reviewed between local midnight and now.
    pub fn reviewed_today<'a>(&self, questions: impl IntoIterator<Item = &'a str>) -> usize {
        let now = self.clock.now();
        let today = now.date_naive();
        let now = now.with_timezone(&Utc);

        questions
            .into_iter()
            .filter_map(|q| self.entry(q)?.last_reviewed)
            .filter(|&reviewed| reviewed <= now && local_date(reviewed) == today)
            .count()
    }

    /// Consecutive days with at least one review, ending today or yesterday.
    pub fn streak(&self) -> u32 {
        let days: HashSet<NaiveDate> = self
            .cards
            .values()
            .filter_map(|state| state.last_reviewed)
            .map(local_date)
            .collect();

        if days.is_empty() {
            return 0;
        }

        let today = self.clock.now().date_naive();
        let mut day = today;
        if !days.contains(&day) {
            match day.pred_opt() {
                Some(yesterday) if days.contains(&yesterday) => day = yesterday,
                _ => return 0,
            }
        }

        let mut streak = 0;
        while days.contains(&day) {
            streak += 1;
            match day.pred_opt() {
                Some(prev) => day = prev,
                None => break,
            }
        }
        streak
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now().with_timezone(&Utc)
    }
}

fn whole_days(days: f64) -> u32 {
    (days.floor() as u32).max(1)
}

fn local_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
