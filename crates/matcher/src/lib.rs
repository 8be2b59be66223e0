// Line-pairing core for intraline diff highlighting
// This crate aligns the removed and added lines of one diff hunk and
// finds the common token that seeds per-pair highlight spans

mod anchor;
mod combinations;
mod line_data;
mod pairing;
mod words;

pub use anchor::{find_common_anchor, Anchor};
pub use combinations::combinations;
pub use pairing::{find_line_pairs, MAX_SCORED_COMBINATIONS};
pub use words::{is_word_char, subwords, subwords_of, words, words_with};
