//! Card extraction from freeform markdown notes.
//!
//! # Format
//! ```markdown
//! #flashcards/cs/algo
//!
//! What is the complexity of binary search?
//! ?
//! O(log n)
//!
//! Name a stable sort
//! ?
//! Merge sort
//! ```
//!
//! A file opts in with a `#flashcards` tag (deck `default`) or `#flashcards/<path>` (deck
//! `<path>` with `/` turned into `.`). Each line that is exactly `?` separates a question,
//! the block of non-blank lines right above it, from its answer below.

use crate::error::ScanError;
use crate::types::Card;
use std::fs;
use std::ops::Range;
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

const DECK_TAG: &str = "#flashcards";
const DECK_TAG_PREFIX: &str = "#flashcards/";
const DEFAULT_DECK: &str = "default";
const SEPARATOR: &str = "?";
const REVIEW_MARKER: &str = "#review-flashcard";

/// Extract cards from every tagged markdown file under `root`.
///
/// Hidden directories are not descended into. Unreadable files and subtrees are skipped;
/// only a failure to read `root` itself is an error.
pub fn scan_directory(root: impl AsRef<Path>) -> Result<Vec<Card>, ScanError> {
    let root = root.as_ref();
    let mut cards = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_hidden_dir(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(ScanError::Root {
                    path: root.to_path_buf(),
                    source,
                });
            }
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_dir() || !is_markdown(entry.path()) {
            continue;
        }

        match fs::read_to_string(entry.path()) {
            Ok(content) => cards.extend(extract_cards(&content, entry.path())),
            Err(err) => debug!(path = %entry.path().display(), error = %err, "skipping unreadable file"),
        }
    }

    debug!(root = %root.display(), count = cards.len(), "scanned notes directory");
    Ok(cards)
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| name.starts_with('.'))
}

fn is_markdown(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "md")
}

/// Find the deck named by the first flashcards tag in `lines`.
///
/// Returns `None` when the file carries no tag, or only a bare `#flashcards/`.
pub fn find_deck<'a>(lines: impl IntoIterator<Item = &'a str>) -> Option<String> {
    lines
        .into_iter()
        .flat_map(str::split_whitespace)
        .find_map(tag_deck)
        .filter(|deck| !deck.is_empty())
}

fn tag_deck(token: &str) -> Option<String> {
    if token == DECK_TAG {
        return Some(DEFAULT_DECK.to_string());
    }
    token
        .strip_prefix(DECK_TAG_PREFIX)
        .map(|segments| segments.replace('/', "."))
}

fn has_tag(line: &str) -> bool {
    line.split_whitespace().any(|token| tag_deck(token).is_some())
}

fn is_tag_only(line: &str) -> bool {
    let mut tokens = line.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(|token| tag_deck(token).is_some())
}

fn ends_question(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed == REVIEW_MARKER || has_tag(trimmed)
}

/// Line ranges of one card within a file, both half-open.
#[derive(Debug, Clone)]
struct CardRange {
    question: Range<usize>,
    answer: Range<usize>,
}

/// Split the content of one markdown file into cards.
///
/// Files without a deck tag or without any `?` separator yield no cards.
pub fn extract_cards(content: &str, source_file: &Path) -> Vec<Card> {
    let lines: Vec<&str> = content.lines().collect();

    let Some(deck) = find_deck(lines.iter().copied()) else {
        return Vec::new();
    };

    let separators: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim() == SEPARATOR)
        .map(|(idx, _)| idx)
        .collect();

    // First pass: the question is the last block of non-blank lines above each separator,
    // never reaching back past the previous separator.
    let mut ranges = Vec::with_capacity(separators.len());
    for (n, &sep) in separators.iter().enumerate() {
        let region_start = if n == 0 { 0 } else { separators[n - 1] + 1 };

        let mut question_end = sep;
        while question_end > region_start && lines[question_end - 1].trim().is_empty() {
            question_end -= 1;
        }

        let mut question_start = question_end;
        while question_start > region_start && !ends_question(lines[question_start - 1]) {
            question_start -= 1;
        }

        ranges.push(CardRange {
            question: question_start..question_end,
            answer: sep + 1..lines.len(),
        });
    }

    // Second pass: each answer stops where the next question starts, or at the first review
    // marker before it. The last answer keeps running to the end of the file.
    for n in 1..ranges.len() {
        let next_question = ranges[n].question.start;
        let answer_start = ranges[n - 1].answer.start;
        let answer_end = lines[answer_start..next_question]
            .iter()
            .position(|line| line.trim() == REVIEW_MARKER)
            .map_or(next_question, |offset| answer_start + offset);
        ranges[n - 1].answer.end = answer_end;
    }

    ranges
        .into_iter()
        .filter_map(|range| {
            let question = join_block(&lines[range.question]);
            if question.is_empty() {
                return None;
            }
            let answer_lines = strip_trailing_tags(&lines[range.answer]);
            Some(Card {
                deck: deck.clone(),
                question,
                answer: join_block(answer_lines),
                source_file: source_file.to_path_buf(),
            })
        })
        .collect()
}

fn strip_trailing_tags<'a, 'b>(mut lines: &'b [&'a str]) -> &'b [&'a str] {
    while let Some((last, rest)) = lines.split_last() {
        if last.trim().is_empty() || is_tag_only(last) {
            lines = rest;
        } else {
            break;
        }
    }
    lines
}

fn join_block(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}
