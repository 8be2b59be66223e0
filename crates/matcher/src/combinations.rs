//! Diagonal-order enumeration of index pairs

/// Iterate every `(first, second)` index combination exactly once, in
/// diagonals of equal index sum: `(0,0), (1,0), (0,1), (2,0), (1,1), ...`,
/// upper-left triangle first, then the lower-right.
///
/// Combinations near the principal diagonal come before far corners, so
/// among equally scored pairs the one closest to its proportional
/// position wins.
pub fn combinations(first_len: usize, second_len: usize) -> impl Iterator<Item = (usize, usize)> {
    // Upper-left half including the principal diagonal
    let upper = (0..first_len).flat_map(move |diagonal| {
        (0..(diagonal + 1).min(second_len)).map(move |second| (diagonal - second, second))
    });

    // Lower-right half
    let lower = (1..second_len).flat_map(move |diagonal| {
        (diagonal..(first_len + diagonal).min(second_len))
            .map(move |second| (first_len - 1 + diagonal - second, second))
    });

    upper.chain(lower)
}
