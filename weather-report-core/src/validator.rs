//! Input completeness validator
//!
//! Classifies a submitted feature set before any inference is attempted.
//! A field still holding the form's sentinel default (0.0) counts as
//! missing. A pure function of the feature set, no side effects.
//!
//! Known limitation, reproduced on purpose: a legitimately entered value of
//! exactly 0.0 is indistinguishable from "not entered". The form-level
//! sentinel makes the boundary unsound; callers that need exact semantics
//! must carry an explicit presence flag per field instead.

use crate::features::{FeatureSet, FEATURE_COUNT, SENTINEL_DEFAULT};

/// Number of fields a submission must fill
pub const REQUIRED_COUNT: usize = FEATURE_COUNT;

/// Classification of a submitted feature set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completeness {
    /// Every field still holds the sentinel default; nothing was entered.
    /// Advisory only, no inference attempted.
    Empty,

    /// Some but not all fields were filled. Blocks inference.
    Partial {
        /// Names of the sentinel-valued fields, in canonical order
        missing: Vec<&'static str>,
        /// How many of the required fields were filled
        filled: usize,
    },

    /// All fields were filled; inference may proceed.
    Complete,
}

impl Completeness {
    /// True when the submission may be fed to the predictors
    pub fn permits_inference(&self) -> bool {
        matches!(self, Completeness::Complete)
    }
}

/// Classify a feature set into exactly one of the three states
pub fn check(features: &FeatureSet) -> Completeness {
    let missing: Vec<&'static str> = features
        .iter()
        .filter(|(_, value)| *value == SENTINEL_DEFAULT)
        .map(|(name, _)| name)
        .collect();

    if missing.len() == REQUIRED_COUNT {
        Completeness::Empty
    } else if missing.is_empty() {
        Completeness::Complete
    } else {
        let filled = REQUIRED_COUNT - missing.len();
        Completeness::Partial { missing, filled }
    }
}
