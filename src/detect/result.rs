use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use super::histogram::Histogram;
use super::thresholds::{
    LOW_MAX_CHI_SQUARE, LOW_MAX_ENTROPY, MEDIUM_MAX_CHI_SQUARE, MEDIUM_MAX_ENTROPY,
};

/// Coarse suspicion category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuspicionLevel {
    Low,
    Medium,
    High,
}

impl SuspicionLevel {
    /// Maps a normalized chi-square score and an entropy to a category.
    ///
    /// Evaluated in order, first match wins. `Low` needs both clauses,
    /// `Medium` needs either one. The clauses are not complements of each
    /// other and must not be folded together.
    pub fn classify(chi_square_score: f64, entropy: f64) -> Self {
        if chi_square_score < LOW_MAX_CHI_SQUARE && entropy < LOW_MAX_ENTROPY {
            SuspicionLevel::Low
        } else if chi_square_score < MEDIUM_MAX_CHI_SQUARE || entropy < MEDIUM_MAX_ENTROPY {
            SuspicionLevel::Medium
        } else {
            SuspicionLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SuspicionLevel::Low => "Low",
            SuspicionLevel::Medium => "Medium",
            SuspicionLevel::High => "High",
        }
    }
}

impl std::fmt::Display for SuspicionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SuspicionLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(SuspicionLevel::Low),
            "medium" => Ok(SuspicionLevel::Medium),
            "high" => Ok(SuspicionLevel::High),
            other => Err(anyhow!("unknown suspicion level '{}'", other)),
        }
    }
}

/// Outcome of a single detection call.
///
/// Scores are already rounded to three decimals; the histogram carries
/// exact counts. The value carries no file name or timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    chi_square_score: f64,
    entropy: f64,
    suspicion_level: SuspicionLevel,
    histogram: Histogram,
}

impl DetectionResult {
    pub(crate) fn new(
        chi_square_score: f64,
        entropy: f64,
        suspicion_level: SuspicionLevel,
        histogram: Histogram,
    ) -> Self {
        Self {
            chi_square_score,
            entropy,
            suspicion_level,
            histogram,
        }
    }

    /// Normalized chi-square LSB-pairing score, `>= 0`.
    pub fn chi_square_score(&self) -> f64 {
        self.chi_square_score
    }

    /// Shannon entropy in bits per sample, within `[0, 8]`.
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    pub fn suspicion_level(&self) -> SuspicionLevel {
        self.suspicion_level
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }
}
