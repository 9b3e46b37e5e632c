//! Scan service: decode, detect, record.

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::path::Path;

use crate::detect::{DetectionResult, Detector, LsbPairingDetector};
use crate::frame::GrayFrame;
use crate::storage::{HistoryRecord, HistoryStore};
use crate::{ingest, now_s};

/// Result of scanning one image, with the metadata the detector never sees.
#[derive(Clone, Debug, Serialize)]
pub struct ScanReport {
    pub filename: String,
    /// Name of the detector that produced `result`.
    pub detector: &'static str,
    pub width: u32,
    pub height: u32,
    pub image_sha256: String,
    pub result: DetectionResult,
}

impl ScanReport {
    pub fn to_history_record(&self, analyzed_at: u64) -> HistoryRecord {
        HistoryRecord {
            analyzed_at,
            filename: self.filename.clone(),
            image_sha256: self.image_sha256.clone(),
            chi_square_score: self.result.chi_square_score(),
            entropy: self.result.entropy(),
            suspicion_level: self.result.suspicion_level(),
        }
    }
}

pub struct Scanner {
    detector: Box<dyn Detector>,
    history: Option<Box<dyn HistoryStore>>,
}

impl Scanner {
    pub fn new(detector: Box<dyn Detector>) -> Self {
        Self {
            detector,
            history: None,
        }
    }

    /// Records every successful scan into `store`.
    pub fn with_history(mut self, store: Box<dyn HistoryStore>) -> Self {
        self.history = Some(store);
        self
    }

    pub fn detector_name(&self) -> &'static str {
        self.detector.name()
    }

    pub fn history_mut(&mut self) -> Option<&mut (dyn HistoryStore + 'static)> {
        self.history.as_deref_mut()
    }

    /// Decodes and analyzes a local image file.
    pub fn scan_path(&mut self, path: &Path) -> Result<ScanReport> {
        let filename = sanitize_filename(path)?;
        let frame = ingest::load_gray(path)?;
        self.scan_frame(&filename, &frame)
    }

    /// Analyzes an already decoded frame.
    pub fn scan_frame(&mut self, filename: &str, frame: &GrayFrame) -> Result<ScanReport> {
        let result = self.detector.detect(frame.samples())?;
        let report = ScanReport {
            filename: filename.to_string(),
            detector: self.detector.name(),
            width: frame.width,
            height: frame.height,
            image_sha256: frame.sha256_hex(),
            result,
        };
        log::info!(
            "{}: {}x{} chi_square={:.3} entropy={:.3} level={}",
            report.filename,
            report.width,
            report.height,
            report.result.chi_square_score(),
            report.result.entropy(),
            report.result.suspicion_level()
        );

        if let Some(store) = self.history.as_mut() {
            store.append(&report.to_history_record(now_s()?))?;
        }
        Ok(report)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(Box::new(LsbPairingDetector::new()))
    }
}

/// Final path component, with anything outside `[A-Za-z0-9._-]` replaced.
pub fn sanitize_filename(path: &Path) -> Result<String> {
    let name = path
        .file_name()
        .ok_or_else(|| anyhow!("path {} has no file name", path.display()))?
        .to_string_lossy();
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        return Err(anyhow!("path {} has no usable file name", path.display()));
    }
    Ok(cleaned)
}
