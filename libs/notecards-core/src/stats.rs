//! Aggregate review counts across a card set.

use crate::clock::Clock;
use crate::store::ReviewStore;
use crate::types::Card;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-deck counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCounts {
    pub due: usize,
    pub new: usize,
    pub total: usize,
}

/// Totals and per-deck breakdown for a card set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueSummary {
    pub due: usize,
    pub new: usize,
    pub overdue: usize,
    pub reviewed_today: usize,
    pub streak: u32,
    pub decks: BTreeMap<String, DeckCounts>,
}

impl DueSummary {
    pub fn compute<C: Clock>(cards: &[Card], store: &ReviewStore<C>) -> Self {
        let mut summary = Self::default();

        for card in cards {
            let deck = summary.decks.entry(card.deck.clone()).or_default();
            deck.total += 1;

            if store.is_due(&card.question) {
                summary.due += 1;
                deck.due += 1;
            }
            if store.is_new(&card.question) {
                summary.new += 1;
                deck.new += 1;
            }
            if store.is_overdue(&card.question) {
                summary.overdue += 1;
            }
        }

        summary.reviewed_today = store.reviewed_today(cards.iter().map(|c| c.question.as_str()));
        summary.streak = store.streak();
        summary
    }

    /// One-line status: `"<due>"`, or `"<due> (<n> new, <m> overdue)"` with zero parts left out.
    pub fn polybar_line(&self) -> String {
        let mut parts = Vec::new();
        if self.new > 0 {
            parts.push(format!("{} new", self.new));
        }
        if self.overdue > 0 {
            parts.push(format!("{} overdue", self.overdue));
        }

        if parts.is_empty() {
            self.due.to_string()
        } else {
            format!("{} ({})", self.due, parts.join(", "))
        }
    }

    /// `"deck: due"` for every deck with due cards, in deck order.
    pub fn by_deck_line(&self) -> String {
        self.decks
            .iter()
            .filter(|(_, counts)| counts.due > 0)
            .map(|(name, counts)| format!("{}: {}", name, counts.due))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::types::{CardState, Rating};
    use chrono::{Duration, Local, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn card(deck: &str, question: &str) -> Card {
        Card {
            deck: deck.into(),
            question: question.into(),
            answer: "answer".into(),
            source_file: PathBuf::from("notes.md"),
        }
    }

    fn store() -> ReviewStore<FixedClock> {
        let now = Local.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        ReviewStore::new("state.json", FixedClock(now))
    }

    #[test]
    fn summary_counts_per_deck() {
        let mut store = store();
        let now = Local.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap().with_timezone(&Utc);

        store.rate("rated today", Rating::Good);
        store.set_state(
            "long overdue",
            CardState {
                next_review: now - Duration::days(3),
                interval: 4,
                ease_factor: 2.5,
                last_reviewed: Some(now - Duration::days(7)),
            },
        );

        let cards = vec![
            card("math", "new math"),
            card("math", "rated today"),
            card("cs.algo", "long overdue"),
            card("cs.algo", "new algo"),
        ];

        let summary = DueSummary::compute(&cards, &store);
        assert_eq!(summary.due, 3);
        assert_eq!(summary.new, 2);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.reviewed_today, 1);
        assert_eq!(summary.streak, 1);
        assert_eq!(
            summary.decks["math"],
            DeckCounts { due: 1, new: 1, total: 2 }
        );
        assert_eq!(
            summary.decks["cs.algo"],
            DeckCounts { due: 2, new: 1, total: 2 }
        );
    }

    #[test]
    fn polybar_line_lists_non_zero_parts() {
        let mut summary = DueSummary {
            due: 5,
            ..Default::default()
        };
        assert_eq!(summary.polybar_line(), "5");

        summary.new = 2;
        assert_eq!(summary.polybar_line(), "5 (2 new)");

        summary.overdue = 1;
        assert_eq!(summary.polybar_line(), "5 (2 new, 1 overdue)");
    }

    #[test]
    fn by_deck_line_skips_decks_without_due_cards() {
        let mut summary = DueSummary::default();
        summary.decks.insert("math".into(), DeckCounts { due: 2, new: 0, total: 3 });
        summary.decks.insert("art".into(), DeckCounts { due: 0, new: 0, total: 1 });
        summary.decks.insert("cs".into(), DeckCounts { due: 1, new: 1, total: 1 });
        assert_eq!(summary.by_deck_line(), "cs: 1  math: 2");
    }

    #[test]
    fn json_field_names() {
        let summary = DueSummary::compute(&[card("math", "q")], &store());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["due"], 1);
        assert_eq!(json["new"], 1);
        assert_eq!(json["overdue"], 0);
        assert_eq!(json["reviewed_today"], 0);
        assert_eq!(json["streak"], 0);
        assert_eq!(json["decks"]["math"]["total"], 1);
    }
}
