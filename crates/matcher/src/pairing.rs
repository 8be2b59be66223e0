//! Recursive pairing of removed and added lines around best-match pivots

use log::{debug, trace};

use crate::combinations::combinations;
use crate::line_data::{word_match_score, LineData, NO_SCORE};

/// Upper bound on the number of scored line combinations per hunk.
/// Hunks with a larger combination space are paired by position instead.
pub const MAX_SCORED_COMBINATIONS: usize = 100 * 100;

/// Word-overlap scores at or below this are treated as no real match.
const INSIGNIFICANT_WORD_MATCH_SCORE: f32 = 0.1;

/// Pair each removed line of a hunk with the added line it most plausibly
/// became.
///
/// `text_of` supplies the text for a line handle; the handles themselves
/// stay opaque and are only cloned into the result. Both the removed and
/// the added handles appear in strictly increasing input order, so pairs
/// never cross, and no handle occurs in more than one pair.
///
/// Degenerate inputs are paired by position: a single combination needs
/// no scoring, and a combination space beyond [`MAX_SCORED_COMBINATIONS`]
/// is aligned by index.
pub fn find_line_pairs<L, F>(text_of: F, removed_lines: &[L], added_lines: &[L]) -> Vec<(L, L)>
where
    L: Clone,
    F: Fn(&L) -> String,
{
    let combination_count = removed_lines.len().saturating_mul(added_lines.len());
    if combination_count == 0 {
        return Vec::new();
    }

    if combination_count == 1 || combination_count > MAX_SCORED_COMBINATIONS {
        if combination_count > MAX_SCORED_COMBINATIONS {
            debug!(
                "pairing {} x {} lines by position, too many combinations to score",
                removed_lines.len(),
                added_lines.len()
            );
        }

        return positional_pairs(removed_lines, added_lines);
    }

    let removed: Vec<LineData<L>> = removed_lines
        .iter()
        .map(|line| LineData::new(line.clone(), text_of(line)))
        .collect();
    let added: Vec<LineData<L>> = added_lines
        .iter()
        .map(|line| LineData::new(line.clone(), text_of(line)))
        .collect();

    let mut pairs = Vec::with_capacity(removed.len().min(added.len()));
    pair_around_pivots(&removed, &added, &mut pairs);
    pairs
}

/// Pair lines by index, `removed[i]` with `added[i]`, up to the shorter
/// side.
fn positional_pairs<L: Clone>(removed: &[L], added: &[L]) -> Vec<(L, L)> {
    removed.iter().cloned().zip(added.iter().cloned()).collect()
}

/// Split both slices at the best-matching pivot pair and recurse on the
/// parts strictly left and strictly right of it. Each level emits its
/// pivot, so the recursion always makes progress and its depth is bounded
/// by the shorter side. Both slices must be non-empty.
fn pair_around_pivots<L: Clone>(
    removed: &[LineData<L>],
    added: &[LineData<L>],
    pairs: &mut Vec<(L, L)>,
) {
    let (removed_index, added_index) = find_best_match(removed, added);

    if removed_index > 0 && added_index > 0 {
        pair_around_pivots(&removed[..removed_index], &added[..added_index], pairs);
    }

    pairs.push((
        removed[removed_index].line.clone(),
        added[added_index].line.clone(),
    ));

    if removed_index + 1 < removed.len() && added_index + 1 < added.len() {
        pair_around_pivots(
            &removed[removed_index + 1..],
            &added[added_index + 1..],
            pairs,
        );
    }
}

/// Choose the pivot pair for one recursion step.
///
/// First, search for the longest pair of identical trimmed lines, so a
/// reindented or relocated line is recognized in preference to a partial
/// rewrite; equal lengths go to the lowest removed index, and each
/// removed line matches its first identical added line. If no trimmed
/// lines match, scan all combinations in diagonal order and keep the
/// pair with the highest word-overlap score, stopping early at a perfect
/// score. When even the best score is insignificant, the first lines on
/// both sides are paired.
fn find_best_match<L>(removed: &[LineData<L>], added: &[LineData<L>]) -> (usize, usize) {
    let mut longest_exact: Option<(usize, usize, usize)> = None;
    for (removed_index, removed_line) in removed.iter().enumerate() {
        let trimmed = removed_line.trimmed();
        let matching_added = added
            .iter()
            .position(|added_line| added_line.trimmed() == trimmed);
        if let Some(added_index) = matching_added {
            if longest_exact.map_or(true, |(_, _, longest)| trimmed.len() > longest) {
                longest_exact = Some((removed_index, added_index, trimmed.len()));
            }
        }
    }

    if let Some((removed_index, added_index, _)) = longest_exact {
        return (removed_index, added_index);
    }

    let mut best = (0, 0);
    let mut max_score = NO_SCORE;
    for (removed_index, added_index) in combinations(removed.len(), added.len()) {
        let score = word_match_score(&removed[removed_index], &added[added_index]);
        if score > max_score {
            max_score = score;
            best = (removed_index, added_index);
            if score == 1.0 {
                trace!("perfect word match at ({}, {})", removed_index, added_index);
                return best;
            }
        }
    }

    if max_score <= INSIGNIFICANT_WORD_MATCH_SCORE {
        (0, 0)
    } else {
        best
    }
}
