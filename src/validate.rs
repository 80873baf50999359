//! Dimension and scale-ratio validation.
//!
//! Every resize request passes through here before any pixel work begins,
//! so a rejected request never produces partial output.

use crate::error::{Axis, ResizeError};

/// Largest supported extent per axis. Also bounds the total pixel count
/// (`MAX_DIMENSION` squared) so area computations cannot overflow.
pub const MAX_DIMENSION: u32 = 65_535;

/// Smallest supported extent per axis.
pub const MIN_DIMENSION: u32 = 1;

/// Largest per-axis target/source ratio.
pub const MAX_SCALE_FACTOR: f64 = 16.0;

/// Smallest per-axis target/source ratio (1/16).
pub const MIN_SCALE_FACTOR: f64 = 0.0625;

/// Checks that image dimensions are within safe bounds.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), ResizeError> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(ResizeError::InvalidDimension { width, height });
    }

    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(ResizeError::InvalidDimension { width, height });
    }

    // Redundant while MAX_DIMENSION is 65535, but keeps the area invariant
    // explicit if the per-axis limit ever changes.
    if width as u64 * height as u64 > MAX_DIMENSION as u64 * MAX_DIMENSION as u64 {
        return Err(ResizeError::InvalidDimension { width, height });
    }

    Ok(())
}

/// Checks that the per-axis scale factors stay within `[1/16, 16]`.
///
/// Both dimension pairs are re-validated first so the ratio arithmetic
/// never sees a zero or oversized extent.
pub fn validate_scale_ratio(
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
) -> Result<(), ResizeError> {
    validate_dimensions(src_width, src_height)?;
    validate_dimensions(dst_width, dst_height)?;

    let width_ratio = dst_width as f64 / src_width as f64;
    let height_ratio = dst_height as f64 / src_height as f64;

    if !(MIN_SCALE_FACTOR..=MAX_SCALE_FACTOR).contains(&width_ratio) {
        return Err(ResizeError::InvalidScaleFactor {
            axis: Axis::Horizontal,
            factor: width_ratio,
        });
    }

    if !(MIN_SCALE_FACTOR..=MAX_SCALE_FACTOR).contains(&height_ratio) {
        return Err(ResizeError::InvalidScaleFactor {
            axis: Axis::Vertical,
            factor: height_ratio,
        });
    }

    Ok(())
}
