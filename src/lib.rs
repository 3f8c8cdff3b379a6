//! Near-duplicate detection for Polish-language joke submissions.
//!
//! This crate is the content-similarity core behind a joke-sharing site's
//! submission flow: before a new joke is accepted, it is compared against the
//! already-stored ones and rejected when it is a whole-text near-duplicate or
//! contains a lifted fragment of an existing joke.
//!
//! ## Pipeline
//!
//! - [`normalize_text`] — canonicalizes raw text (case, whitespace,
//!   punctuation, Polish diacritics) into a comparison form.
//! - [`levenshtein_distance`] — full-matrix edit distance over code points.
//! - [`calculate_similarity`] — edit distance as a 0–100 percentage relative
//!   to the longer normalized string.
//! - [`is_duplicate`] / [`contains_similar_fragment`] /
//!   [`comprehensive_duplicate_check`] — threshold policy over a
//!   caller-supplied candidate set, with a structured [`DuplicateVerdict`].
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence, no state across calls. The
//! caller fetches candidates from storage and owns debouncing and fail-open
//! behavior when that fetch fails; every function here is total over its
//! input domain and returns the same result on any machine.

mod config;
mod distance;
mod normalize;
mod policy;
mod similarity;
mod types;

pub use crate::config::{
    DEFAULT_FRAGMENT_LENGTH, DEFAULT_FRAGMENT_THRESHOLD, DEFAULT_SIMILARITY_THRESHOLD,
    DuplicateCheckConfig,
};
pub use crate::distance::levenshtein_distance;
pub use crate::normalize::{collapse_whitespace, normalize_text};
pub use crate::policy::{
    FRAGMENT_REASON, WHOLE_TEXT_REASON, comprehensive_duplicate_check, contains_similar_fragment,
    is_duplicate,
};
pub use crate::similarity::calculate_similarity;
pub use crate::types::{
    DuplicateError, DuplicateVerdict, ExistingJoke, FragmentVerdict, SimilarJoke,
};
