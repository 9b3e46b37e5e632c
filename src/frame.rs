//! Decoded grayscale frames.
//!
//! A `GrayFrame` is the hand-off point between decoding and detection: a
//! single 8-bit intensity channel flattened in row-major order.

use anyhow::{anyhow, Result};
use sha2::{Digest, Sha256};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayFrame {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl GrayFrame {
    /// Wraps row-major luma samples. The length must equal `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| anyhow!("gray frame dimensions overflow"))?;
        if pixels.len() != expected {
            return Err(anyhow!(
                "gray frame length mismatch: expected {}, got {}",
                expected,
                pixels.len()
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Callers guarantee `pixels.len() == width * height`.
    pub(crate) fn new_unchecked(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Row-major intensity samples.
    pub fn samples(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.pixels
    }

    /// SHA-256 over dimensions and samples, hex encoded.
    ///
    /// Identifies the analyzed content independently of the container the
    /// image arrived in.
    pub fn sha256_hex(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_le_bytes());
        hasher.update(self.height.to_le_bytes());
        hasher.update(&self.pixels);
        hex::encode(hasher.finalize())
    }
}
