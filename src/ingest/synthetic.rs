//! Generated frames for tests and sample images.

use crate::frame::GrayFrame;

/// Horizontal ramp: every row is `0, 1, .., 255, 0, 1, ..` across the width.
///
/// At 256x256 every intensity occurs exactly 256 times.
pub fn gradient(width: u32, height: u32) -> GrayFrame {
    let row: Vec<u8> = (0..width).map(|x| (x % 256) as u8).collect();
    let pixels = row.repeat(height as usize);
    GrayFrame::new_unchecked(width, height, pixels)
}

/// Single-intensity fill.
pub fn solid(width: u32, height: u32, value: u8) -> GrayFrame {
    let pixels = vec![value; width as usize * height as usize];
    GrayFrame::new_unchecked(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_rows_repeat() {
        let frame = gradient(300, 3);
        let samples = frame.samples();
        assert_eq!(samples.len(), 900);
        assert_eq!(samples[255], 255);
        assert_eq!(samples[256], 0);
        assert_eq!(&samples[..300], &samples[300..600]);
    }

    #[test]
    fn solid_fill() {
        let frame = solid(8, 8, 128);
        assert!(frame.samples().iter().all(|&s| s == 128));
    }
}
