//! Identity matching configuration

use serde::Deserialize;

use crate::domain::event::{IdentityMatcher, DEFAULT_SIMILARITY_THRESHOLD};

use super::error::ValidationError;

/// Tuning for the fuzzy participant-identity matcher
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    /// Similarity ratio above which two identities are merged.
    ///
    /// Raising it makes matching stricter (fewer false merges, more
    /// synthesized duplicates); lowering it does the opposite.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

fn default_similarity_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

impl MatchingConfig {
    /// Validate the threshold is in a sane band
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.similarity_threshold <= 0.5 || self.similarity_threshold > 1.0 {
            return Err(ValidationError::InvalidSimilarityThreshold);
        }
        Ok(())
    }

    /// Build the matcher this configuration describes
    pub fn matcher(&self) -> IdentityMatcher {
        IdentityMatcher::new(self.similarity_threshold)
    }
}
