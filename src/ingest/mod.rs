//! Image ingestion.
//!
//! Turns encoded images or raw pixel buffers into `GrayFrame`s for the
//! detector. This layer owns every format concern; the detector only ever
//! sees flattened 8-bit intensity samples.
//!
//! The ingestion layer MUST NOT:
//! - Write decoded frames to disk
//! - Log pixel content

mod image_file;
mod normalize;
pub mod synthetic;

pub use image_file::{decode_gray, load_gray};
pub use normalize::{normalize_to_gray, rgb_to_luma, PixelFormat};
