use line_matcher::{find_common_anchor, Anchor};
use pretty_assertions::assert_eq;

#[test]
fn test_no_common_token() {
    assert_eq!(find_common_anchor("abc", "xyz"), None);
    assert_eq!(find_common_anchor("", ""), None);
    assert_eq!(find_common_anchor("foo", ""), None);
    assert_eq!(find_common_anchor("", "foo"), None);
}

#[test]
fn test_common_word_with_offsets() {
    let anchor = find_common_anchor("let result = compute();", "result == expected");
    assert_eq!(
        anchor,
        Some(Anchor {
            text: "result",
            removed_start: 4,
            added_start: 0,
        })
    );
}

#[test]
fn test_longest_common_word_wins() {
    let anchor = find_common_anchor("a verylongword b", "verylongword a");
    assert_eq!(
        anchor,
        Some(Anchor {
            text: "verylongword",
            removed_start: 2,
            added_start: 0,
        })
    );
}

#[test]
fn test_length_ties_resolved_by_added_order() {
    // "bb" comes first on the added side and "aa" never beats its length
    let anchor = find_common_anchor("aa bb", "bb aa");
    assert_eq!(
        anchor,
        Some(Anchor {
            text: "bb",
            removed_start: 3,
            added_start: 0,
        })
    );
}

#[test]
fn test_whole_words_beat_subwords() {
    // "1" is a common word, so the subword pass never runs even though
    // "foo" would be a longer subword match
    let anchor = find_common_anchor("fooBar = 1", "fooBaz = 1");
    assert_eq!(
        anchor,
        Some(Anchor {
            text: "1",
            removed_start: 9,
            added_start: 9,
        })
    );
}

#[test]
fn test_subword_fallback() {
    let anchor = find_common_anchor("fooBar()", "fooBaz()");
    assert_eq!(
        anchor,
        Some(Anchor {
            text: "foo",
            removed_start: 0,
            added_start: 0,
        })
    );
}

#[test]
fn test_subword_offsets_are_absolute() {
    let anchor = find_common_anchor("theBigCat", "aBigDog");
    assert_eq!(
        anchor,
        Some(Anchor {
            text: "Big",
            removed_start: 3,
            added_start: 1,
        })
    );
}

#[test]
fn test_repeated_word_uses_first_occurrences() {
    let anchor = find_common_anchor("x = x + x;", "y = x;");
    assert_eq!(
        anchor,
        Some(Anchor {
            text: "x",
            removed_start: 0,
            added_start: 4,
        })
    );
}

#[test]
fn test_snake_and_camel_share_subwords() {
    let anchor = find_common_anchor("max_retries = 3;", "maxRetries = 5;");
    assert_eq!(
        anchor,
        Some(Anchor {
            text: "max",
            removed_start: 0,
            added_start: 0,
        })
    );
}
