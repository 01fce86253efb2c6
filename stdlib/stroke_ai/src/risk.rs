use std::fmt;

use serde::{Deserialize, Serialize};
use stroke_model::FeatureVector;

/// Percentage at or above which the risk is reported as high
pub const HIGH_THRESHOLD: f64 = 75.0;
/// Percentage at or above which the risk is reported as medium
pub const MEDIUM_THRESHOLD: f64 = 40.0;

/// Probability of each outcome class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityDistribution {
    pub no_stroke: f64,
    pub stroke: f64,
}

impl ProbabilityDistribution {
    /// Probability of the positive class as a percentage in [0, 100].
    pub fn stroke_percentage(&self) -> f64 {
        (self.stroke * 100.0).clamp(0.0, 100.0)
    }
}

/// Outcome of one inference call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub features: FeatureVector,
    pub distribution: ProbabilityDistribution,
    pub percentage: f64,
}

impl Prediction {
    pub fn new(features: FeatureVector, distribution: ProbabilityDistribution) -> Self {
        Self {
            features,
            distribution,
            percentage: distribution.stroke_percentage(),
        }
    }

    pub fn severity(&self) -> SeverityBand {
        SeverityBand::from_percentage(self.percentage)
    }
}

/// Risk message tier derived from the stroke percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBand {
    Low,
    Medium,
    High,
}

impl SeverityBand {
    /// `>= 75` high, `>= 40` medium, anything below low.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= HIGH_THRESHOLD {
            Self::High
        } else if percentage >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn style(self) -> MessageStyle {
        match self {
            Self::Low => MessageStyle::Success,
            Self::Medium => MessageStyle::Warning,
            Self::High => MessageStyle::Error,
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Visual treatment of a status message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(SeverityBand::from_percentage(0.0), SeverityBand::Low);
        assert_eq!(SeverityBand::from_percentage(39.999), SeverityBand::Low);
        assert_eq!(SeverityBand::from_percentage(40.0), SeverityBand::Medium);
        assert_eq!(SeverityBand::from_percentage(74.999), SeverityBand::Medium);
        assert_eq!(SeverityBand::from_percentage(75.0), SeverityBand::High);
        assert_eq!(SeverityBand::from_percentage(100.0), SeverityBand::High);
    }

    #[test]
    fn styles_follow_severity() {
        assert_eq!(SeverityBand::Low.style(), MessageStyle::Success);
        assert_eq!(SeverityBand::Medium.style(), MessageStyle::Warning);
        assert_eq!(SeverityBand::High.style(), MessageStyle::Error);
    }

    #[test]
    fn percentage_is_clamped() {
        let d = ProbabilityDistribution {
            no_stroke: -0.0000001,
            stroke: 1.0000001,
        };
        assert_eq!(d.stroke_percentage(), 100.0);
    }
}
