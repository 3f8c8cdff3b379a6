//! Value types exchanged with the duplicate-check caller.
//!
//! All of these are transient: they live for one check invocation and are
//! never persisted by this crate. Serde renames follow the web-facing JSON
//! shape consumed by the submission form (`isDuplicate`, `similarJoke`,
//! `hasSimilarFragment`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored joke supplied by the caller as a comparison candidate.
///
/// The caller fetches these (filtered to the statuses it cares about,
/// typically pending + published) and passes them in; this crate treats them
/// as read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExistingJoke {
    pub id: i64,
    pub content: String,
}

impl ExistingJoke {
    pub fn new(id: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}

/// The best (first threshold-crossing) match found during a check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimilarJoke {
    /// Raw (un-normalized) content of the matched joke.
    pub content: String,
    pub id: i64,
    /// Similarity in percent, rounded to one decimal place.
    pub similarity: f64,
}

/// Outcome of the whole-text check and of the comprehensive check.
///
/// `reason` is a localized, human-readable message and is only populated by
/// [`comprehensive_duplicate_check`](crate::comprehensive_duplicate_check).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateVerdict {
    pub is_duplicate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similar_joke: Option<SimilarJoke>,
}

impl DuplicateVerdict {
    /// Verdict for a submission with no qualifying match.
    pub fn clean() -> Self {
        Self {
            is_duplicate: false,
            reason: None,
            similar_joke: None,
        }
    }
}

/// Outcome of the sliding-window fragment check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FragmentVerdict {
    pub has_similar_fragment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similar_joke: Option<SimilarJoke>,
}

impl FragmentVerdict {
    pub fn clean() -> Self {
        Self {
            has_similar_fragment: false,
            similar_joke: None,
        }
    }
}

/// Errors surfaced by this crate.
///
/// The check functions themselves are total over their input domain and
/// never fail; the only error source is explicit config validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DuplicateError {
    #[error("invalid duplicate check config: {0}")]
    InvalidConfig(String),
}
