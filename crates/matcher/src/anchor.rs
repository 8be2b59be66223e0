//! Longest-common-token search used to seed intraline highlighting

use std::collections::HashMap;

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::words::{subwords_of, words};

/// A token shared by a removed and an added line, with its byte offset on
/// each side. Highlighters align their intraline spans on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{} ({}, {})", text, removed_start, added_start)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Anchor<'a> {
    /// The common token text.
    pub text: &'a str,
    /// Byte offset of the token in the removed line's text.
    pub removed_start: usize,
    /// Byte offset of the token in the added line's text.
    pub added_start: usize,
}

/// Find the longest token two lines share: first among whole words, then
/// among identifier subwords. `None` when the texts have no token in
/// common.
pub fn find_common_anchor<'a>(removed_text: &'a str, added_text: &'a str) -> Option<Anchor<'a>> {
    let removed_words: Vec<(&str, usize)> = words(removed_text).collect();
    let added_words: Vec<(&str, usize)> = words(added_text).collect();

    longest_common(removed_words.iter().copied(), added_words.iter().copied()).or_else(|| {
        longest_common(
            subwords_of(removed_words.iter().copied()),
            subwords_of(added_words.iter().copied()),
        )
    })
}

/// The longest token occurring in both sequences. Equal lengths are
/// broken by the earliest occurrence on the added side; the removed
/// offset is the token's first occurrence on the removed side.
fn longest_common<'a>(
    removed: impl Iterator<Item = (&'a str, usize)>,
    added: impl Iterator<Item = (&'a str, usize)>,
) -> Option<Anchor<'a>> {
    let mut removed_starts: HashMap<&str, usize> = HashMap::new();
    for (token, start) in removed {
        removed_starts.entry(token).or_insert(start);
    }

    let mut best: Option<Anchor<'a>> = None;
    for (token, added_start) in added {
        if let Some(&removed_start) = removed_starts.get(token) {
            if best.map_or(true, |anchor| token.len() > anchor.text.len()) {
                best = Some(Anchor {
                    text: token,
                    removed_start,
                    added_start,
                });
            }
        }
    }

    best
}
