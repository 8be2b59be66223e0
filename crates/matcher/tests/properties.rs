use std::collections::HashSet;

use line_matcher::find_line_pairs;
use proptest::prelude::*;

// Side-tagged handles keep removed and added lines distinguishable even
// when their texts collide
type Handle = (usize, usize);

fn pair_lines(removed: &[String], added: &[String]) -> Vec<(Handle, Handle)> {
    let removed_handles: Vec<Handle> = (0..removed.len()).map(|index| (0, index)).collect();
    let added_handles: Vec<Handle> = (0..added.len()).map(|index| (1, index)).collect();
    find_line_pairs(
        |&(side, index): &Handle| {
            if side == 0 {
                removed[index].clone()
            } else {
                added[index].clone()
            }
        },
        &removed_handles,
        &added_handles,
    )
}

proptest! {
    #[test]
    fn pair_count_never_exceeds_shorter_side(
        removed in prop::collection::vec("[ a-c_]{0,10}", 0..14),
        added in prop::collection::vec("[ a-c_]{0,10}", 0..14),
    ) {
        let pairs = pair_lines(&removed, &added);
        prop_assert!(pairs.len() <= removed.len().min(added.len()));
    }

    #[test]
    fn pairs_are_strictly_increasing_on_both_sides(
        removed in prop::collection::vec("[ a-c_]{0,10}", 0..14),
        added in prop::collection::vec("[ a-c_]{0,10}", 0..14),
    ) {
        let pairs = pair_lines(&removed, &added);
        for window in pairs.windows(2) {
            let ((_, removed_a), (_, added_a)) = window[0];
            let ((_, removed_b), (_, added_b)) = window[1];
            prop_assert!(removed_a < removed_b);
            prop_assert!(added_a < added_b);
        }
    }

    #[test]
    fn identical_sides_align_positionally(
        lines in prop::collection::vec("[ a-zA-Z_()=;]{0,16}", 1..12),
    ) {
        let pairs = pair_lines(&lines, &lines);
        prop_assert_eq!(pairs.len(), lines.len());
        for (offset, ((_, removed_index), (_, added_index))) in pairs.into_iter().enumerate() {
            prop_assert_eq!(removed_index, offset);
            prop_assert_eq!(added_index, offset);
        }
    }

    #[test]
    fn no_handle_is_reused(
        removed in prop::collection::vec("[ a-c_]{0,10}", 0..14),
        added in prop::collection::vec("[ a-c_]{0,10}", 0..14),
    ) {
        let pairs = pair_lines(&removed, &added);
        let mut seen_removed = HashSet::new();
        let mut seen_added = HashSet::new();
        for (removed_handle, added_handle) in pairs {
            prop_assert!(seen_removed.insert(removed_handle));
            prop_assert!(seen_added.insert(added_handle));
        }
    }
}
