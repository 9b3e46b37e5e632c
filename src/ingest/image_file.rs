//! Still-image decoding.
//!
//! Decodes whatever container formats the `image` crate is built with and
//! reduces the result to a single 8-bit luma channel.

use anyhow::{anyhow, Context, Result};
use image::{DynamicImage, GenericImageView};
use std::path::Path;

use super::normalize::{normalize_to_gray, PixelFormat};
use crate::frame::GrayFrame;

const MAX_IMAGE_BYTES: u64 = 64 * 1024 * 1024;

/// Reads and decodes a local image file.
pub fn load_gray(path: &Path) -> Result<GrayFrame> {
    let len = std::fs::metadata(path)
        .with_context(|| format!("stat image {}", path.display()))?
        .len();
    if len > MAX_IMAGE_BYTES {
        return Err(anyhow!(
            "image {} is {} bytes; limit is {}",
            path.display(),
            len,
            MAX_IMAGE_BYTES
        ));
    }
    let bytes = std::fs::read(path).with_context(|| format!("read image {}", path.display()))?;
    decode_gray(&bytes).with_context(|| format!("decode image {}", path.display()))
}

/// Decodes an in-memory encoded image.
pub fn decode_gray(bytes: &[u8]) -> Result<GrayFrame> {
    if bytes.is_empty() {
        return Err(anyhow!("empty image buffer"));
    }
    let image = image::load_from_memory(bytes).context("decode image")?;
    to_gray_frame(image)
}

fn to_gray_frame(image: DynamicImage) -> Result<GrayFrame> {
    let (width, height) = image.dimensions();
    let pixels = match image {
        DynamicImage::ImageLuma8(gray) => gray.into_raw(),
        other => {
            let rgb = other.into_rgb8();
            normalize_to_gray(rgb.as_raw(), width, height, PixelFormat::Rgb24)?
        }
    };
    GrayFrame::new(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn encode_png(image: DynamicImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn decodes_gray_png_unchanged() -> Result<()> {
        let gray = image::GrayImage::from_fn(16, 4, |x, y| image::Luma([(x * 16 + y) as u8]));
        let expected = gray.as_raw().clone();
        let frame = decode_gray(&encode_png(DynamicImage::ImageLuma8(gray)))?;
        assert_eq!((frame.width, frame.height), (16, 4));
        assert_eq!(frame.samples(), expected.as_slice());
        Ok(())
    }

    #[test]
    fn converts_color_png_to_luma() -> Result<()> {
        let rgb = RgbImage::from_pixel(3, 2, Rgb([255, 0, 0]));
        let frame = decode_gray(&encode_png(DynamicImage::ImageRgb8(rgb)))?;
        assert_eq!(frame.samples(), &[76u8; 6]);
        Ok(())
    }

    #[test]
    fn rejects_garbage() {
        assert!(decode_gray(b"definitely not an image").is_err());
        assert!(decode_gray(&[]).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_gray(Path::new("/nonexistent/stego/sample.png")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/stego/sample.png"));
    }
}
