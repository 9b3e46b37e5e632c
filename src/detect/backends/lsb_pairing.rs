use crate::detect::backend::Detector;
use crate::detect::error::DetectError;
use crate::detect::histogram::Histogram;
use crate::detect::result::{DetectionResult, SuspicionLevel};
use crate::detect::thresholds::{MAX_ENTROPY_BITS, MIN_STD_DEV, SCORE_DECIMALS};

/// Chi-square LSB-pairing detector combined with histogram entropy.
#[derive(Clone, Copy, Debug, Default)]
pub struct LsbPairingDetector;

impl LsbPairingDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for LsbPairingDetector {
    fn name(&self) -> &'static str {
        "lsb-pairing"
    }

    fn detect_histogram(&self, histogram: Histogram) -> Result<DetectionResult, DetectError> {
        let total = histogram.total();
        if total == 0 {
            return Err(DetectError::InvalidInput(
                "histogram holds no samples".to_string(),
            ));
        }

        let std_dev = histogram.std_dev();
        if std_dev < MIN_STD_DEV {
            log::debug!(
                "near-uniform input (std_dev={:.4}), skipping pairing test",
                std_dev
            );
            return Ok(DetectionResult::new(
                0.0,
                0.0,
                SuspicionLevel::Low,
                histogram,
            ));
        }

        let score = normalized_chi_square(&histogram);
        let entropy = shannon_entropy(&histogram);
        let level = SuspicionLevel::classify(score, entropy);
        log::debug!(
            "lsb pairing: samples={} score={:.6} entropy={:.6} level={}",
            total,
            score,
            entropy,
            level
        );

        Ok(DetectionResult::new(
            round_to(score, SCORE_DECIMALS),
            round_to(entropy, SCORE_DECIMALS),
            level,
            histogram,
        ))
    }
}

/// Scores a sample sequence with the default detector.
pub fn detect(samples: &[u8]) -> Result<DetectionResult, DetectError> {
    LsbPairingDetector.detect(samples)
}

/// Raw chi-square sum over the 128 `(2k, 2k + 1)` intensity pairs.
///
/// Empty pairs contribute nothing.
pub fn pair_chi_square(histogram: &Histogram) -> f64 {
    histogram
        .lsb_pairs()
        .filter(|&(even, odd)| even + odd > 0)
        .map(|(even, odd)| {
            let expected = (even + odd) as f64 / 2.0;
            let even_delta = even as f64 - expected;
            let odd_delta = odd as f64 - expected;
            even_delta * even_delta / expected + odd_delta * odd_delta / expected
        })
        .sum()
}

/// Chi-square sum scaled by sample count and occupied bin count.
pub fn normalized_chi_square(histogram: &Histogram) -> f64 {
    let total = histogram.total();
    if total == 0 {
        return 0.0;
    }
    let bins = histogram.nonzero_bins().max(1);
    pair_chi_square(histogram) / (total as f64 * bins as f64)
}

/// Shannon entropy in bits of the histogram as a distribution.
pub fn shannon_entropy(histogram: &Histogram) -> f64 {
    let total = histogram.total();
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;
    let entropy: f64 = histogram
        .counts()
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum();
    entropy.clamp(0.0, MAX_ENTROPY_BITS)
}

/// Rounds the exact decimal value of `value`, ties to even.
///
/// `{:.N}` formatting decides the midpoint on the exact binary value, so
/// `0.0625` becomes `0.062` and `1.0005` (stored just below the tie) stays
/// `1.0`.
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}
