//! Core types shared by the extractor and the review store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Card extracted from a markdown file. Recomputed on every scan, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub deck: String,
    pub question: String,
    pub answer: String,
    pub source_file: PathBuf,
}

/// Rating for a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// Map a review key press to a rating: `1`/`h`, `2`/`g`, `3`/`e`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "1" | "h" => Some(Self::Hard),
            "2" | "g" => Some(Self::Good),
            "3" | "e" => Some(Self::Easy),
            _ => None,
        }
    }
}

/// Scheduling state for one card, as stored in the state file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    pub next_review: DateTime<Utc>,
    /// Days until the next review. Zero means never reviewed.
    pub interval: u32,
    pub ease_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl CardState {
    pub const INITIAL_EASE: f64 = 2.5;
    pub const MINIMUM_EASE: f64 = 1.3;
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            next_review: DateTime::<Utc>::UNIX_EPOCH,
            interval: 0,
            ease_factor: Self::INITIAL_EASE,
            last_reviewed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_from_key() {
        assert_eq!(Rating::from_key("1"), Some(Rating::Hard));
        assert_eq!(Rating::from_key("g"), Some(Rating::Good));
        assert_eq!(Rating::from_key("3"), Some(Rating::Easy));
        assert_eq!(Rating::from_key("x"), None);
    }

    #[test]
    fn default_state_is_due_immediately() {
        let state = CardState::default();
        assert_eq!(state.interval, 0);
        assert_eq!(state.ease_factor, 2.5);
        assert_eq!(state.next_review.timestamp(), 0);
        assert!(state.last_reviewed.is_none());
    }

    #[test]
    fn unreviewed_state_omits_last_reviewed() {
        let json = serde_json::to_value(CardState::default()).unwrap();
        assert!(json.get("last_reviewed").is_none());
        assert_eq!(json["interval"], 0);
    }
}
