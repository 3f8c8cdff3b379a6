//! Similarity scoring between two texts.
//!
//! Converts edit distance into a 0–100 percentage relative to the longer of
//! the two normalized strings. Both inputs are normalized unconditionally, so
//! callers may pass raw or already-normalized text interchangeably
//! (normalization is idempotent).

use crate::distance::levenshtein_distance;
use crate::normalize::normalize_text;

/// Percentage similarity between `a` and `b` after normalization.
///
/// 100 means identical after normalization, 0 means maximally dissimilar or
/// either side empty. The score is normalized by `max(len(a), len(b))` in
/// code points; this asymmetry of reference length is deliberate and affects
/// which matches cross a threshold at different input lengths.
///
/// ```rust
/// use zartdup::calculate_similarity;
///
/// assert_eq!(calculate_similarity("Żółw!", "zolw"), 100.0);
/// assert_eq!(calculate_similarity("", "anything"), 0.0);
/// ```
pub fn calculate_similarity(a: &str, b: &str) -> f64 {
    score_normalized(&normalize_text(a), &normalize_text(b))
}

/// Scores two already-normalized strings.
///
/// Split out so the fragment sweep can normalize each candidate once instead
/// of per window; observable results are identical to [`calculate_similarity`].
pub(crate) fn score_normalized(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        // Degenerate guard for zero-length windows.
        return 100.0;
    }

    let distance = levenshtein_distance(a, b);
    (((max_len - distance) as f64 / max_len as f64) * 100.0).clamp(0.0, 100.0)
}
