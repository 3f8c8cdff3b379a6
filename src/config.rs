//! Configuration for the duplicate check.
//!
//! `DuplicateCheckConfig` is cheap to clone and serde-friendly so it can be
//! stored alongside moderation settings or embedded in a larger application
//! config. Every field carries a serde default; deserializing `{}` yields
//! the stock policy.
//!
//! ```json
//! {
//!   "similarity_threshold": 85.0,
//!   "check_fragments": true,
//!   "fragment_length": 20,
//!   "fragment_threshold": 90.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::types::DuplicateError;

/// Default whole-text similarity threshold, in percent.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 85.0;

/// Default sliding-window width, in code points.
pub const DEFAULT_FRAGMENT_LENGTH: usize = 20;

/// Default fragment similarity threshold, in percent.
pub const DEFAULT_FRAGMENT_THRESHOLD: f64 = 90.0;

/// Tuning knobs for [`comprehensive_duplicate_check`](crate::comprehensive_duplicate_check).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DuplicateCheckConfig {
    /// Whole-text similarity (percent) at or above which a submission is
    /// rejected as a duplicate.
    #[serde(default = "DuplicateCheckConfig::default_similarity_threshold")]
    pub similarity_threshold: f64,
    /// Whether to run the fragment sweep when the whole-text check passes.
    #[serde(default = "DuplicateCheckConfig::default_check_fragments")]
    pub check_fragments: bool,
    /// Width of the sliding window, in code points of normalized text.
    #[serde(default = "DuplicateCheckConfig::default_fragment_length")]
    pub fragment_length: usize,
    /// Fragment similarity (percent) at or above which a window counts as a
    /// lifted fragment. Stricter than the whole-text threshold because the
    /// windows are short.
    #[serde(default = "DuplicateCheckConfig::default_fragment_threshold")]
    pub fragment_threshold: f64,
}

impl DuplicateCheckConfig {
    pub(crate) fn default_similarity_threshold() -> f64 {
        DEFAULT_SIMILARITY_THRESHOLD
    }

    pub(crate) fn default_check_fragments() -> bool {
        true
    }

    pub(crate) fn default_fragment_length() -> usize {
        DEFAULT_FRAGMENT_LENGTH
    }

    pub(crate) fn default_fragment_threshold() -> f64 {
        DEFAULT_FRAGMENT_THRESHOLD
    }

    /// Validate the configuration.
    ///
    /// Opt-in guard for callers deserializing config from untrusted input
    /// (e.g. an admin panel). The check functions never call this: they are
    /// total, and out-of-range thresholds simply produce degenerate results
    /// (a threshold above 100 matches nothing; below 0, everything).
    pub fn validate(&self) -> Result<(), DuplicateError> {
        if !self.similarity_threshold.is_finite()
            || !(0.0..=100.0).contains(&self.similarity_threshold)
        {
            return Err(DuplicateError::InvalidConfig(
                "similarity_threshold must be between 0 and 100".into(),
            ));
        }
        if !self.fragment_threshold.is_finite()
            || !(0.0..=100.0).contains(&self.fragment_threshold)
        {
            return Err(DuplicateError::InvalidConfig(
                "fragment_threshold must be between 0 and 100".into(),
            ));
        }
        if self.fragment_length == 0 {
            return Err(DuplicateError::InvalidConfig(
                "fragment_length must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for DuplicateCheckConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: Self::default_similarity_threshold(),
            check_fragments: Self::default_check_fragments(),
            fragment_length: Self::default_fragment_length(),
            fragment_threshold: Self::default_fragment_threshold(),
        }
    }
}
