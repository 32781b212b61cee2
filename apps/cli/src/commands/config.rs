//! `config`: inspect and edit the ignore list and notes path.

use anyhow::{Context as _, Result};
use notecards_core::{Card, Config};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

use super::Context;

pub fn show(ctx: &Context, path: Option<&Path>) -> Result<ExitCode> {
    println!("Config file: {}", ctx.config_path.display());
    println!("State file:  {}", ctx.state_path.display());
    match &ctx.config.notes_path {
        Some(notes) => println!("Notes path:  {}", notes.display()),
        None => println!("Notes path:  (not set)"),
    }

    if ctx.config.resolve_notes_path(path).is_some() {
        let cards = ctx.scan_all(path)?;
        print!("\n{}", render_decks(&cards, &ctx.config));
    }
    Ok(ExitCode::SUCCESS)
}

pub fn ignore(mut ctx: Context, deck: &str) -> Result<ExitCode> {
    if ctx.config.ignore_deck(deck) {
        save(&ctx)?;
        println!("Ignoring deck {deck}");
    } else {
        println!("Deck {deck} is already ignored");
    }
    Ok(ExitCode::SUCCESS)
}

pub fn unignore(mut ctx: Context, deck: &str) -> Result<ExitCode> {
    if ctx.config.unignore_deck(deck) {
        save(&ctx)?;
        println!("No longer ignoring deck {deck}");
    } else {
        println!("Deck {deck} was not ignored");
    }
    Ok(ExitCode::SUCCESS)
}

pub fn set_path(mut ctx: Context, notes: &Path) -> Result<ExitCode> {
    let notes = notes
        .canonicalize()
        .with_context(|| format!("cannot resolve notes path {}", notes.display()))?;
    ctx.config.notes_path = Some(notes.clone());
    save(&ctx)?;
    println!("Notes path set to {}", notes.display());
    Ok(ExitCode::SUCCESS)
}

fn save(ctx: &Context) -> Result<()> {
    ctx.config
        .save_to(&ctx.config_path)
        .context("failed to save config")
}

/// Every deck with its card count, marking the ignored ones.
pub fn render_decks(cards: &[Card], config: &Config) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for card in cards {
        *counts.entry(card.deck.as_str()).or_default() += 1;
    }

    let mut out = String::new();
    for (deck, count) in counts {
        let marker = if config.is_deck_ignored(deck) {
            "  [ignored]"
        } else {
            ""
        };
        let _ = writeln!(out, "{deck:<30} {count:>3} cards{marker}");
    }
    out
}
