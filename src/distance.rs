//! Levenshtein edit distance over Unicode code points.

/// Minimum number of single-character insertions, deletions and
/// substitutions needed to transform `a` into `b`.
///
/// Classic full-matrix dynamic programming, indexed per code point (not per
/// grapheme cluster); both sides of a comparison must index the same way for
/// scores to be stable, and code points are what the normalizer emits.
/// O(len(a) * len(b)) time and space, which is fine at joke lengths (tens to
/// low hundreds of characters).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0usize; a_chars.len() + 1]; b_chars.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b_chars.len() {
        for j in 1..=a_chars.len() {
            matrix[i][j] = if b_chars[i - 1] == a_chars[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + matrix[i - 1][j - 1]
                    .min(matrix[i][j - 1])
                    .min(matrix[i - 1][j])
            };
        }
    }

    matrix[b_chars.len()][a_chars.len()]
}
