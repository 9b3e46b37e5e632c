//! LSB steganalysis detector.
//!
//! Builds the intensity histogram of a single 8-bit channel, runs the
//! chi-square test over `(2k, 2k + 1)` intensity pairs, measures Shannon
//! entropy and maps both onto a coarse suspicion level.
//!
//! Detectors are stateless: they never decode images, never persist
//! anything and never see file names or timestamps.

mod backend;
mod backends;
mod error;
mod histogram;
mod result;
pub mod thresholds;

pub use backend::Detector;
pub use backends::lsb_pairing::{
    detect, normalized_chi_square, pair_chi_square, shannon_entropy,
};
pub use backends::LsbPairingDetector;
pub use error::DetectError;
pub use histogram::{Histogram, BINS};
pub use result::{DetectionResult, SuspicionLevel};
