//! Per-line data derived while scoring candidate pairs

use std::collections::HashSet;

use crate::words::words;

/// Text-derived view of one line, computed once per matching call and
/// discarded when it returns.
pub(crate) struct LineData<L> {
    /// The caller's opaque handle for this line.
    pub(crate) line: L,
    /// The line's full text as supplied by the accessor.
    full: String,
    /// The distinct words of the trimmed text.
    words: HashSet<String>,
    /// Summed length of the distinct words.
    words_total_len: usize,
}

impl<L> LineData<L> {
    pub(crate) fn new(line: L, text: String) -> Self {
        let words: HashSet<String> = words(text.trim())
            .map(|(word, _)| word.to_owned())
            .collect();
        let words_total_len = words.iter().map(String::len).sum();

        Self {
            line,
            full: text,
            words,
            words_total_len,
        }
    }

    /// The line text with surrounding whitespace removed.
    pub(crate) fn trimmed(&self) -> &str {
        self.full.trim()
    }
}

/// Sentinel for lines that cannot be scored at all; strictly below every
/// valid score.
pub(crate) const NO_SCORE: f32 = -1.0;

/// Summed length of the words both lines share, relative to the larger of
/// the two lines' summed word lengths. Returns a value in `[0, 1]`, or
/// [`NO_SCORE`] when either line has no words.
pub(crate) fn word_match_score<L>(removed: &LineData<L>, added: &LineData<L>) -> f32 {
    if removed.words.is_empty() || added.words.is_empty() {
        return NO_SCORE;
    }

    let common_len: usize = removed
        .words
        .intersection(&added.words)
        .map(|word| word.len())
        .sum();

    common_len as f32 / removed.words_total_len.max(added.words_total_len) as f32
}
