//! Duplicate-detection policy.
//!
//! Two independent checks over a caller-supplied candidate set, composed by
//! [`comprehensive_duplicate_check`]:
//!
//! - **Whole-text**: the full normalized submission against each candidate.
//! - **Fragment**: a fixed-width window slid over the normalized submission,
//!   one code point at a time, against each candidate. Catches a lifted
//!   sentence embedded in an otherwise different joke.
//!
//! Both checks are first-match: iteration stops at the first candidate (or
//! window/candidate pair) at or above threshold, in the order the caller
//! supplied the candidates. The reported match is therefore not necessarily
//! the highest-scoring one.
//!
//! Everything here is pure and synchronous. The caller fetches candidates
//! from storage beforehand and decides what to do with the verdict; an empty
//! candidate set is trivially clean.

use tracing::debug;

use crate::config::DuplicateCheckConfig;
use crate::normalize::normalize_text;
use crate::similarity::{calculate_similarity, score_normalized};
use crate::types::{DuplicateVerdict, ExistingJoke, FragmentVerdict, SimilarJoke};

/// Rejection reason when the whole submission is too close to a stored joke.
pub const WHOLE_TEXT_REASON: &str = "Ten dowcip jest zbyt podobny do już istniejącego";

/// Rejection reason when a window of the submission matches a stored joke.
pub const FRAGMENT_REASON: &str = "Fragment tego dowcipu jest zbyt podobny do istniejącego dowcipu";

/// Whole-text duplicate check.
///
/// Normalizes `new_text` once, then scores it against each candidate's raw
/// content in caller order. The scorer re-normalizes both arguments
/// unconditionally, so passing the pre-normalized submission through it is
/// safe (normalization is idempotent). The first candidate at or above
/// `threshold` short-circuits the scan.
pub fn is_duplicate(new_text: &str, existing: &[ExistingJoke], threshold: f64) -> DuplicateVerdict {
    let normalized_new = normalize_text(new_text);

    for joke in existing {
        let similarity = calculate_similarity(&normalized_new, &joke.content);
        if similarity >= threshold {
            debug!(joke_id = joke.id, similarity, threshold, "whole-text duplicate");
            return DuplicateVerdict {
                is_duplicate: true,
                reason: None,
                similar_joke: Some(similar_joke(joke, similarity)),
            };
        }
    }

    DuplicateVerdict::clean()
}

/// Sliding-window fragment check.
///
/// Slides a `fragment_length`-code-point window over the normalized
/// submission, from offset 0 to `len - fragment_length` inclusive, and scores
/// each window against each candidate (window loop outer, candidate loop
/// inner). A submission shorter than the window produces no windows and is
/// trivially clean. The first crossing pair short-circuits the sweep.
///
/// Candidates are normalized once up front rather than per window; the score
/// is unchanged because normalization is idempotent.
pub fn contains_similar_fragment(
    new_text: &str,
    existing: &[ExistingJoke],
    fragment_length: usize,
    threshold: f64,
) -> FragmentVerdict {
    let normalized_new = normalize_text(new_text);
    let chars: Vec<char> = normalized_new.chars().collect();
    if fragment_length == 0 || chars.len() < fragment_length {
        return FragmentVerdict::clean();
    }

    let normalized_candidates: Vec<String> = existing
        .iter()
        .map(|joke| normalize_text(&joke.content))
        .collect();

    for (offset, window) in chars.windows(fragment_length).enumerate() {
        let fragment: String = window.iter().collect();
        for (joke, normalized_content) in existing.iter().zip(&normalized_candidates) {
            let similarity = score_normalized(&fragment, normalized_content);
            if similarity >= threshold {
                debug!(
                    joke_id = joke.id,
                    similarity,
                    threshold,
                    offset,
                    "fragment duplicate"
                );
                return FragmentVerdict {
                    has_similar_fragment: true,
                    similar_joke: Some(similar_joke(joke, similarity)),
                };
            }
        }
    }

    FragmentVerdict::clean()
}

/// Two-stage veto pipeline over a submission.
///
/// Runs the whole-text check first and returns immediately on a hit. Only
/// when it passes, and only if `check_fragments` is enabled, runs the
/// fragment sweep. The verdict carries a localized reason for whichever
/// stage fired, or is clean when neither did.
///
/// ```rust
/// use zartdup::{comprehensive_duplicate_check, DuplicateCheckConfig, ExistingJoke};
///
/// let existing = vec![ExistingJoke::new(1, "Jak się nazywa polski informatyk?")];
/// let verdict = comprehensive_duplicate_check(
///     "Jak sie nazywa polski informatyk",
///     &existing,
///     &DuplicateCheckConfig::default(),
/// );
/// assert!(verdict.is_duplicate);
/// ```
pub fn comprehensive_duplicate_check(
    new_text: &str,
    existing: &[ExistingJoke],
    config: &DuplicateCheckConfig,
) -> DuplicateVerdict {
    let whole = is_duplicate(new_text, existing, config.similarity_threshold);
    if whole.is_duplicate {
        return DuplicateVerdict {
            reason: Some(WHOLE_TEXT_REASON.to_string()),
            ..whole
        };
    }

    if config.check_fragments {
        let fragment = contains_similar_fragment(
            new_text,
            existing,
            config.fragment_length,
            config.fragment_threshold,
        );
        if fragment.has_similar_fragment {
            return DuplicateVerdict {
                is_duplicate: true,
                reason: Some(FRAGMENT_REASON.to_string()),
                similar_joke: fragment.similar_joke,
            };
        }
    }

    DuplicateVerdict::clean()
}

fn similar_joke(joke: &ExistingJoke, similarity: f64) -> SimilarJoke {
    SimilarJoke {
        content: joke.content.clone(),
        id: joke.id,
        similarity: round_similarity(similarity),
    }
}

/// Rounds a similarity to one decimal place for reporting.
fn round_similarity(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jokes(entries: &[(i64, &str)]) -> Vec<ExistingJoke> {
        entries
            .iter()
            .map(|(id, content)| ExistingJoke::new(*id, *content))
            .collect()
    }

    #[test]
    fn detects_duplicate_differing_only_in_diacritics_and_punctuation() {
        let existing = jokes(&[(1, "Jak się nazywa polski informatyk?")]);
        let verdict = is_duplicate("Jak sie nazywa polski informatyk", &existing, 85.0);

        assert!(verdict.is_duplicate);
        let similar = verdict.similar_joke.expect("match reported");
        assert_eq!(similar.id, 1);
        assert!(similar.similarity >= 85.0);
    }

    #[test]
    fn first_qualifying_candidate_wins_over_a_later_better_one() {
        // Candidate 1 scores exactly 85.0 (3 edits over 20 chars), candidate 2
        // scores 100. First-match policy must report candidate 1.
        let existing = jokes(&[(1, "stary dowcip o kotku"), (2, "Stary dowcip o kocie!")]);
        let verdict = is_duplicate("stary dowcip o kocie", &existing, 85.0);

        assert!(verdict.is_duplicate);
        let similar = verdict.similar_joke.expect("match reported");
        assert_eq!(similar.id, 1);
        assert_eq!(similar.similarity, 85.0);
    }

    #[test]
    fn no_candidate_above_threshold_is_clean() {
        let existing = jokes(&[(1, "zupełnie inny tekst o zimie")]);
        let verdict = is_duplicate("dowcip o programistach", &existing, 85.0);
        assert_eq!(verdict, DuplicateVerdict::clean());
    }

    #[test]
    fn empty_candidate_set_is_clean() {
        assert_eq!(is_duplicate("cokolwiek", &[], 85.0), DuplicateVerdict::clean());
        let fragment = contains_similar_fragment("cokolwiek dluzszego niz okno", &[], 20, 90.0);
        assert_eq!(fragment, FragmentVerdict::clean());
    }

    #[test]
    fn reported_similarity_is_rounded_to_one_decimal() {
        // 1 edit over 15 chars: 93.333...% -> 93.3.
        let existing = jokes(&[(1, "jak sie nazywal")]);
        let verdict = is_duplicate("jak sie nazywa", &existing, 90.0);
        let similar = verdict.similar_joke.expect("match reported");
        assert_eq!(similar.similarity, 93.3);
    }

    #[test]
    fn fragment_check_finds_lifted_fragment() {
        // "programista pije kawe" (21 chars normalized) embedded verbatim in
        // otherwise unrelated text; the best 20-char window is one edit away.
        let existing = jokes(&[(7, "Programista pije kawę")]);
        let new_text = "Zupełnie inna historia: programista pije kawę, a potem śpi";

        let whole = is_duplicate(new_text, &existing, 85.0);
        assert!(!whole.is_duplicate);

        let fragment = contains_similar_fragment(new_text, &existing, 20, 90.0);
        assert!(fragment.has_similar_fragment);
        let similar = fragment.similar_joke.expect("match reported");
        assert_eq!(similar.id, 7);
        assert!(similar.similarity >= 90.0);
    }

    #[test]
    fn text_shorter_than_window_produces_no_fragments() {
        let existing = jokes(&[(1, "krotki zart")]);
        let verdict = contains_similar_fragment("krotki zart", &existing, 20, 90.0);
        assert_eq!(verdict, FragmentVerdict::clean());
    }

    #[test]
    fn zero_fragment_length_is_clean_not_a_panic() {
        let existing = jokes(&[(1, "cokolwiek")]);
        let verdict = contains_similar_fragment("dowolny tekst wejsciowy", &existing, 0, 90.0);
        assert_eq!(verdict, FragmentVerdict::clean());
    }

    #[test]
    fn comprehensive_reports_whole_text_reason_first() {
        let existing = jokes(&[(
            5,
            "Dlaczego programista nie lubi natury? Bo ma za dużo bugów.",
        )]);
        let verdict = comprehensive_duplicate_check(
            "dlaczego programista nie lubi natury bo ma za duzo bugow",
            &existing,
            &DuplicateCheckConfig::default(),
        );

        assert!(verdict.is_duplicate);
        assert_eq!(verdict.reason.as_deref(), Some(WHOLE_TEXT_REASON));
        let similar = verdict.similar_joke.expect("match reported");
        assert_eq!(similar.id, 5);
        assert_eq!(similar.similarity, 100.0);
    }

    #[test]
    fn comprehensive_falls_through_to_fragment_reason() {
        let existing = jokes(&[(7, "Programista pije kawę")]);
        let verdict = comprehensive_duplicate_check(
            "Zupełnie inna historia: programista pije kawę, a potem śpi",
            &existing,
            &DuplicateCheckConfig::default(),
        );

        assert!(verdict.is_duplicate);
        assert_eq!(verdict.reason.as_deref(), Some(FRAGMENT_REASON));
        assert_eq!(verdict.similar_joke.expect("match reported").id, 7);
    }

    #[test]
    fn disabling_fragments_skips_the_sweep_entirely() {
        // Fails the whole-text check but would pass the fragment check.
        let existing = jokes(&[(7, "Programista pije kawę")]);
        let cfg = DuplicateCheckConfig {
            check_fragments: false,
            ..Default::default()
        };
        let verdict = comprehensive_duplicate_check(
            "Zupełnie inna historia: programista pije kawę, a potem śpi",
            &existing,
            &cfg,
        );
        assert_eq!(verdict, DuplicateVerdict::clean());
    }

    #[test]
    fn threshold_above_100_matches_nothing() {
        let existing = jokes(&[(1, "ten sam tekst")]);
        let verdict = is_duplicate("ten sam tekst", &existing, 101.0);
        assert!(!verdict.is_duplicate);
    }

    #[test]
    fn round_similarity_keeps_one_decimal() {
        assert_eq!(round_similarity(93.333_333), 93.3);
        assert_eq!(round_similarity(85.0), 85.0);
        assert_eq!(round_similarity(99.95), 100.0);
    }
}
