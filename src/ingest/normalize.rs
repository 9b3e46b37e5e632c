use anyhow::{anyhow, Result};

/// Layout of a raw interleaved pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Gray8,
    Rgb24,
    Rgba32,
}

impl PixelFormat {
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Rgb24 => 3,
            PixelFormat::Rgba32 => 4,
        }
    }
}

/// Converts a raw buffer to row-major 8-bit luma.
///
/// Alpha is ignored.
pub fn normalize_to_gray(
    pixels: &[u8],
    width: u32,
    height: u32,
    format: PixelFormat,
) -> Result<Vec<u8>> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(format.channels()))
        .ok_or_else(|| anyhow!("{:?} frame dimensions overflow", format))?;
    if pixels.len() != expected {
        return Err(anyhow!(
            "{:?} frame length mismatch: expected {}, got {}",
            format,
            expected,
            pixels.len()
        ));
    }

    match format {
        PixelFormat::Gray8 => Ok(pixels.to_vec()),
        PixelFormat::Rgb24 | PixelFormat::Rgba32 => Ok(pixels
            .chunks_exact(format.channels())
            .map(|px| rgb_to_luma(px[0], px[1], px[2]))
            .collect()),
    }
}

/// ITU-R 601-2 luma, `L = R*299/1000 + G*587/1000 + B*114/1000`.
///
/// Fixed point with 16 fractional bits, rounded to nearest.
pub fn rgb_to_luma(r: u8, g: u8, b: u8) -> u8 {
    let l = r as u32 * 19_595 + g as u32 * 38_470 + b as u32 * 7_471 + 0x8000;
    (l >> 16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_gray_input_keeps_level() -> Result<()> {
        let rgb = vec![128u8; 12];
        let gray = normalize_to_gray(&rgb, 2, 2, PixelFormat::Rgb24)?;
        assert_eq!(gray, vec![128u8; 4]);
        Ok(())
    }

    #[test]
    fn luma_weights_follow_601() {
        assert_eq!(rgb_to_luma(255, 255, 255), 255);
        assert_eq!(rgb_to_luma(0, 0, 0), 0);
        assert_eq!(rgb_to_luma(255, 0, 0), 76);
        assert_eq!(rgb_to_luma(0, 255, 0), 150);
        assert_eq!(rgb_to_luma(0, 0, 255), 29);
    }

    #[test]
    fn rgba_ignores_alpha() -> Result<()> {
        let rgba = vec![10, 10, 10, 0, 200, 200, 200, 255];
        let gray = normalize_to_gray(&rgba, 2, 1, PixelFormat::Rgba32)?;
        assert_eq!(gray, vec![10, 200]);
        Ok(())
    }

    #[test]
    fn gray_pass_through_validates_length() {
        let err = normalize_to_gray(&[1u8; 5], 2, 2, PixelFormat::Gray8).unwrap_err();
        assert!(err.to_string().contains("expected 4, got 5"));
    }
}
