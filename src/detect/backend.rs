use super::error::DetectError;
use super::histogram::Histogram;
use super::result::DetectionResult;

/// Steganalysis detector.
///
/// # Audit Boundary
///
/// Implementations MUST be pure functions of their input:
/// - No state retained between calls
/// - No disk, network or history access
/// - The sample slice is read-only and is not kept beyond the call
///
/// Detectors take `&self` and are `Send + Sync`, so one instance can be
/// shared across threads scanning independent images.
pub trait Detector: Send + Sync {
    /// Detector identifier.
    fn name(&self) -> &'static str;

    /// Score an already-built histogram.
    ///
    /// Fails with `InvalidInput` when the histogram holds no samples.
    fn detect_histogram(&self, histogram: Histogram) -> Result<DetectionResult, DetectError>;

    /// Score a row-major sequence of 8-bit intensity samples.
    fn detect(&self, samples: &[u8]) -> Result<DetectionResult, DetectError> {
        if samples.is_empty() {
            return Err(DetectError::InvalidInput(
                "pixel sample sequence is empty".to_string(),
            ));
        }
        self.detect_histogram(Histogram::from_samples(samples))
    }
}
