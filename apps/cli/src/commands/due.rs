//! `due`: due counts for scripts and status bars.

use anyhow::Result;
use notecards_core::DueSummary;
use std::path::Path;
use std::process::ExitCode;

use super::Context;
use crate::cli::DueFormat;

pub fn run(ctx: &Context, path: Option<&Path>, format: DueFormat) -> Result<ExitCode> {
    let cards = ctx.load_cards(path)?;
    let store = ctx.load_store()?;

    let summary = DueSummary::compute(&cards, &store);
    println!("{}", render(&summary, format)?);

    // Non-zero status lets status bars hide the module when nothing is due.
    Ok(if summary.due == 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

pub fn render(summary: &DueSummary, format: DueFormat) -> Result<String> {
    Ok(match format {
        DueFormat::Plain => summary.due.to_string(),
        DueFormat::Json => serde_json::to_string(summary)?,
        DueFormat::Polybar => summary.polybar_line(),
        DueFormat::ByDeck => summary.by_deck_line(),
    })
}
