//! Sentence-level complexity labeling.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counts::StructureCount;

/// Label for one sentence-level unit.
///
/// The threshold is structural, not ratio-based: a sentence is Complex
/// exactly when it contains at least one complex T-unit. Complex
/// sentences are the ones worth imitating; downstream presentation
/// highlights them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum UnitLabel {
    /// No complex T-unit in the sentence.
    Simple,
    /// At least one complex T-unit in the sentence.
    Complex,
}

impl UnitLabel {
    /// Classify a counted unit.
    pub const fn from_counts(counts: &StructureCount) -> Self {
        if counts.complex_t_units > 0 {
            Self::Complex
        } else {
            Self::Simple
        }
    }

    /// The label as reported in tabular output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Complex => "Complex",
        }
    }
}

impl std::fmt::Display for UnitLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
