//! High-quality image resizing with bicubic (Mitchell-Netravali) interpolation.
//!
//! Resamples a raster image to an arbitrary target resolution for 8-bit and
//! 16-bit, grayscale and RGBA pixel layouts. Each destination pixel is
//! reconstructed from a 4x4 source neighborhood with the Mitchell-Netravali
//! cubic filter (B=C=1/3), edge-replicated at image borders, then quantized
//! back to the source bit depth. Output is always dimensionally exact and
//! free of NaN/Inf/overflow for every legal input.
//!
//! Per-axis scale factors are bounded to [1/16, 16]; requests outside that
//! window (or outside 1..=65535 per axis) are rejected before any pixel
//! work begins.
//!
//! # Example
//!
//! ```
//! use resizer::{resize, ImageBuffer, PixelFormat, SampleData};
//!
//! let src = ImageBuffer::from_raw(
//!     PixelFormat::Gray8,
//!     4,
//!     4,
//!     SampleData::U8(vec![128u8; 16]),
//! )
//! .unwrap();
//!
//! let dst = resize(&src, 8, 8).unwrap();
//! assert_eq!((dst.width(), dst.height()), (8, 8));
//! assert_eq!(dst.data(), &SampleData::U8(vec![128u8; 64]));
//! ```

pub mod buffer;
pub mod decode;
pub mod error;
pub mod output;
pub mod resample;
pub mod validate;

pub use buffer::{ImageBuffer, PixelFormat, SampleData};
pub use error::{CodecError, ResizeError};
pub use resample::{resize, ResizeConfig, Resizer};
