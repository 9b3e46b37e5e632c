//! Stego Witness
//!
//! Statistical detection of least-significant-bit steganography in grayscale
//! images.
//!
//! # Architecture
//!
//! - `detect`: the stateless detector. Histogram, chi-square LSB-pairing
//!   test, Shannon entropy and threshold classification.
//! - `ingest`: decoding of image files and raw buffers into `GrayFrame`s.
//! - `storage`: analysis history behind the `HistoryStore` trait.
//! - `scan`: glue that decodes, detects and records.
//! - `export`: history bundles and tables.
//! - `config`: file and environment configuration for the tools.
//!
//! The detector never decodes, persists or timestamps anything; those
//! concerns live in the layers around it.

use anyhow::Result;
use std::time::{SystemTime, UNIX_EPOCH};

pub mod config;
pub mod detect;
pub mod export;
pub mod frame;
pub mod ingest;
pub mod scan;
pub mod storage;

pub use config::ScanConfig;
pub use detect::{
    detect, DetectError, DetectionResult, Detector, Histogram, LsbPairingDetector, SuspicionLevel,
};
pub use export::{render_table, HistoryExport};
pub use frame::GrayFrame;
pub use scan::{ScanReport, Scanner};
pub use storage::{recent, HistoryRecord, HistoryStore, InMemoryHistoryStore, SqliteHistoryStore};

/// `env_logger` filter used by the binaries when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub(crate) fn now_s() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}
