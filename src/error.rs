//! Error taxonomy for the resampling core and the image I/O layer.
//!
//! Core failures (`ResizeError`) are surfaced synchronously to the caller of
//! `Resizer::resize` and are never retried internally: the computation is
//! deterministic, so retrying cannot change its outcome. A failed sample
//! aborts the whole resize rather than substituting a default value.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::{MAX_DIMENSION, MAX_SCALE_FACTOR, MIN_DIMENSION, MIN_SCALE_FACTOR};

/// Image axis, used to report which direction failed ratio validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// Failures of the resampling engine and its configuration.
#[derive(Debug, Error)]
pub enum ResizeError {
    /// Width or height outside `[MIN_DIMENSION, MAX_DIMENSION]`, or the
    /// total pixel count would overflow the safe area limit.
    #[error("dimensions {width}x{height} outside supported range {MIN_DIMENSION}..={MAX_DIMENSION} per axis")]
    InvalidDimension { width: u32, height: u32 },

    /// Per-axis target/source ratio outside `[1/16, 16]`.
    #[error("{axis} scale factor {factor:.4} outside supported range {MIN_SCALE_FACTOR}..={MAX_SCALE_FACTOR}")]
    InvalidScaleFactor { axis: Axis, factor: f64 },

    /// A sample center fell outside the source extent. Unreachable for
    /// callers using the half-pixel-center mapping; kept as a defensive
    /// check on the kernel-bounds computation.
    #[error("sample center {center} outside axis extent 0..{size}")]
    CoordinateOutOfBounds { center: f64, size: u32 },

    /// Fractional kernel offsets left the unit square.
    #[error("fractional offsets ({dx}, {dy}) outside unit square")]
    FractionOutOfRange { dx: f64, dy: f64 },

    /// Interpolation produced NaN or infinity, which indicates non-finite
    /// source samples or a latent kernel bug.
    #[error("interpolation produced a non-finite channel value")]
    NonFiniteValue,

    /// Wraps a kernel failure with the destination pixel being computed.
    #[error("sampling failed at ({x}, {y})")]
    Sampling {
        x: u32,
        y: u32,
        #[source]
        source: Box<ResizeError>,
    },

    /// Sample vector length does not match `width * height * channels`.
    #[error("sample buffer holds {got} values, expected {expected}")]
    BufferSizeMismatch { expected: usize, got: usize },
}

/// Failures of the decode/encode boundary around the core.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("file too large: {size} bytes exceeds {limit}")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Sample buffer and dimensions disagree when rebuilding an image for
    /// encoding. Structurally unreachable for buffers built by this crate.
    #[error("sample buffer does not match image dimensions")]
    LayoutMismatch,
}
