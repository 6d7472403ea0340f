//! Qualitative bands over the 0-4 score scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse reading of an average, used to colour results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Average up to 1.5.
    Critical,
    /// Above 1.5, up to 2.5.
    Weak,
    /// Above 2.5, up to 3.5.
    Fair,
    /// Above 3.5.
    Strong,
}

impl ScoreBand {
    pub fn for_average(average: f64) -> Self {
        if average > 3.5 {
            ScoreBand::Strong
        } else if average > 2.5 {
            ScoreBand::Fair
        } else if average > 1.5 {
            ScoreBand::Weak
        } else {
            ScoreBand::Critical
        }
    }

    /// Returns the display label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Critical => "Critical",
            ScoreBand::Weak => "Weak",
            ScoreBand::Fair => "Fair",
            ScoreBand::Strong => "Strong",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
