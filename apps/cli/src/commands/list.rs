//! `list`: decks with card and due counts.

use anyhow::Result;
use notecards_core::{Card, Clock, DueSummary, ReviewStore};
use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

use super::Context;

pub fn run(ctx: &Context, path: Option<&Path>) -> Result<ExitCode> {
    let cards = ctx.load_cards(path)?;
    let store = ctx.load_store()?;
    print!("{}", render(&cards, &store));
    Ok(ExitCode::SUCCESS)
}

/// One line per deck in name order, then a TOTAL line.
pub fn render<C: Clock>(cards: &[Card], store: &ReviewStore<C>) -> String {
    let summary = DueSummary::compute(cards, store);
    let mut out = String::new();

    for (name, counts) in &summary.decks {
        let _ = writeln!(out, "{}", deck_line(name, counts.total, counts.due));
    }
    let total: usize = summary.decks.values().map(|c| c.total).sum();
    let _ = writeln!(out, "{}", deck_line("TOTAL", total, summary.due));
    out
}

fn deck_line(name: &str, total: usize, due: usize) -> String {
    format!("{name:<30} {total:>3} cards  ({due} due)")
}
