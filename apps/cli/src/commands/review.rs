//! `review`: line-oriented review session over due cards.

use anyhow::{Context as _, Result};
use notecards_core::config::deck_matches;
use notecards_core::{Card, Clock, Rating, ReviewStore};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use super::Context;

/// Outcome of a review session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub reviewed: usize,
    pub total: usize,
    pub quit: bool,
}

pub fn run(ctx: &Context, path: Option<&Path>, decks: &[String]) -> Result<ExitCode> {
    let cards = ctx.load_cards(path)?;
    let mut store = ctx.load_store()?;

    if cards.is_empty() {
        println!("No flashcards found.");
        return Ok(ExitCode::SUCCESS);
    }

    let queue = due_cards(&cards, &store, decks);
    if queue.is_empty() {
        println!("No cards due. Streak: {} days.", store.streak());
        return Ok(ExitCode::SUCCESS);
    }

    let report = run_session(&queue, &mut store, io::stdin().lock(), io::stdout().lock())?;
    store.save().context("failed to save review state")?;
    info!(reviewed = report.reviewed, total = report.total, "review session finished");

    Ok(ExitCode::SUCCESS)
}

/// Due cards, restricted to `decks` and their sub-decks when any are given.
pub fn due_cards<'a, C: Clock>(
    cards: &'a [Card],
    store: &ReviewStore<C>,
    decks: &[String],
) -> Vec<&'a Card> {
    cards
        .iter()
        .filter(|card| decks.is_empty() || decks.iter().any(|d| deck_matches(&card.deck, d)))
        .filter(|card| store.is_due(&card.question))
        .collect()
}

enum Step {
    Continue,
    Quit,
}

/// Show each card, wait for Enter, show the answer, then read a rating.
///
/// `q` or end of input stops the session early; cards rated so far stay rated.
pub fn run_session<C: Clock, R: BufRead, W: Write>(
    cards: &[&Card],
    store: &mut ReviewStore<C>,
    mut input: R,
    mut output: W,
) -> io::Result<SessionReport> {
    let total = cards.len();
    let mut reviewed = 0;
    let mut quit = false;

    for (idx, card) in cards.iter().enumerate() {
        writeln!(output, "\n[{}/{}] {}", idx + 1, total, card.deck)?;
        writeln!(output, "\n{}\n", card.question)?;
        write!(output, "(Enter: show answer, q: quit) ")?;
        output.flush()?;

        match read_command(&mut input)? {
            Some(line) if line == "q" => {}
            Some(_) => {
                writeln!(output, "\n{}\n", card.answer)?;
                if let Step::Continue = rate_card(card, store, &mut input, &mut output)? {
                    reviewed += 1;
                    continue;
                }
            }
            None => {}
        }

        quit = true;
        break;
    }

    writeln!(output, "\nReviewed {reviewed} of {total} cards.")?;
    Ok(SessionReport {
        reviewed,
        total,
        quit,
    })
}

fn rate_card<C: Clock, R: BufRead, W: Write>(
    card: &Card,
    store: &mut ReviewStore<C>,
    input: &mut R,
    output: &mut W,
) -> io::Result<Step> {
    loop {
        write!(output, "Rate (1/h hard, 2/g good, 3/e easy, q quit): ")?;
        output.flush()?;

        let Some(line) = read_command(input)? else {
            return Ok(Step::Quit);
        };
        if line == "q" {
            return Ok(Step::Quit);
        }
        match Rating::from_key(&line) {
            Some(rating) => {
                store.rate(&card.question, rating);
                return Ok(Step::Continue);
            }
            None => writeln!(output, "Unrecognized rating: {line}")?,
        }
    }
}

/// Next input line, trimmed and lowercased. `None` at end of input.
fn read_command<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
