//! Word and subword tokenization
//!
//! Words are maximal runs of word characters; subwords further split an
//! identifier-style word at case transitions and separators. All offsets
//! are byte offsets into the input text.

/// Default word character test: a letter, digit, or underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Iterate the words of `text` with their byte offsets, using the default
/// word character test.
pub fn words(text: &str) -> impl Iterator<Item = (&str, usize)> + '_ {
    words_with(text, is_word_char)
}

/// Iterate maximal runs of characters satisfying `is_word_char`, left to
/// right, with the byte offset of each run. Separator characters never
/// appear in the output.
pub fn words_with<'a, F>(text: &'a str, is_word_char: F) -> impl Iterator<Item = (&'a str, usize)> + 'a
where
    F: Fn(char) -> bool + 'a,
{
    let mut chars = text.char_indices().peekable();
    std::iter::from_fn(move || {
        // Skip separators until a word starts
        let (start, first) = loop {
            let (index, c) = chars.next()?;
            if is_word_char(c) {
                break (index, c);
            }
        };

        // Extend to the end of the run
        let mut end = start + first.len_utf8();
        while let Some(&(index, c)) = chars.peek() {
            if !is_word_char(c) {
                break;
            }
            chars.next();
            end = index + c.len_utf8();
        }

        Some((&text[start..end], start))
    })
}

/// Split a single word into identifier-style segments.
///
/// A new segment starts before each upper-case run (`"fooBar"` splits
/// into `"foo"` and `"Bar"`), and any non-alphanumeric character ends the
/// current segment without appearing in one (`"foo_bar"` splits into
/// `"foo"` and `"bar"`). A leading separator run is folded into the first
/// segment (`"_tmpVar"` keeps `"_tmp"`), except a lone leading separator
/// directly followed by an upper-case run, which is dropped (`"_Var"`
/// yields only `"Var"`).
pub fn subwords(word: &str) -> impl Iterator<Item = (&str, usize)> + '_ {
    let mut segments = Vec::new();

    if let Some(first) = word.chars().next() {
        let first_is_alnum = first.is_alphanumeric();
        let first_len = first.len_utf8();
        let mut start = 0;
        let mut previous_upper = first.is_uppercase();
        let mut previous_alnum = false;

        for (index, c) in word.char_indices() {
            let current_upper = c.is_uppercase();
            if previous_upper != current_upper {
                previous_upper = current_upper;
                if current_upper {
                    // Emit the segment before the upper-case run, but
                    // never a lone leading separator
                    if !(index == first_len && !first_is_alnum) {
                        segments.push((&word[start..index], start));
                    }

                    start = index;
                }
            }

            if index > 0 && !c.is_alphanumeric() {
                // A separator ends the segment and is dropped
                if start < index && previous_alnum {
                    segments.push((&word[start..index], start));
                }

                start = index + c.len_utf8();
                previous_upper = true;
            }

            previous_alnum = c.is_alphanumeric();
        }

        if start < word.len() && !(word.len() == first_len && !first_is_alnum) {
            segments.push((&word[start..], start));
        }
    }

    segments.into_iter()
}

/// Flatten the subwords of a `(word, start)` sequence, re-basing each
/// subword offset to be absolute in the text the words came from.
pub fn subwords_of<'a, I>(words: I) -> impl Iterator<Item = (&'a str, usize)>
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    words.into_iter().flat_map(|(word, word_start)| {
        subwords(word).map(move |(subword, start)| (subword, word_start + start))
    })
}
