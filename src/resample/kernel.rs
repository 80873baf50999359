//! Bicubic kernel math: weight function, quantization, and index safety.
//!
//! Pure numeric functions with no allocation; everything operates in f64
//! so intermediate sums keep full precision before quantization.

use crate::error::ResizeError;

/// Kernel support: 4x4 source pixels per destination sample.
pub const KERNEL_SIZE: usize = 4;

/// A 4x4 window of channel samples plus its fractional offset gives one
/// interpolated scalar. Stack-local, rebuilt per pixel per channel.
pub type KernelWindow = [[f64; KERNEL_SIZE]; KERNEL_SIZE];

const MITCHELL_B: f64 = 1.0 / 3.0;
const MITCHELL_C: f64 = 1.0 / 3.0;

/// Mitchell-Netravali cubic weight with B=C=1/3.
///
/// This setting minimizes both blur and ringing artifacts. Support is
/// [-2, 2]; the kernel is continuous at |x|=1 and |x|=2 and the four taps
/// at any fractional phase sum to 1 (partition of unity).
#[inline]
pub fn cubic_weight(x: f64) -> f64 {
    let x = x.abs();

    if x < 1.0 {
        // (12 - 9B - 6C)|x|^3 + (-18 + 12B + 6C)|x|^2 + (6 - 2B), over 6
        ((12.0 - 9.0 * MITCHELL_B - 6.0 * MITCHELL_C) * x * x * x
            + (-18.0 + 12.0 * MITCHELL_B + 6.0 * MITCHELL_C) * x * x
            + (6.0 - 2.0 * MITCHELL_B))
            / 6.0
    } else if x < 2.0 {
        // (-B - 6C)|x|^3 + (6B + 30C)|x|^2 + (-12B - 48C)|x| + (8B + 24C), over 6
        ((-MITCHELL_B - 6.0 * MITCHELL_C) * x * x * x
            + (6.0 * MITCHELL_B + 30.0 * MITCHELL_C) * x * x
            + (-12.0 * MITCHELL_B - 48.0 * MITCHELL_C) * x
            + (8.0 * MITCHELL_B + 24.0 * MITCHELL_C))
            / 6.0
    } else {
        0.0
    }
}

/// Rounds half-up and clamps to `[0, max_value]`.
///
/// Total for any finite input and for ±infinity. Non-finite channel values
/// are rejected by [`interpolate_bicubic`] before quantization, so NaN
/// never reaches this function on the resize path.
#[inline]
pub fn clamp_quantize(value: f64, max_value: f64) -> f64 {
    if value < 0.0 {
        return 0.0;
    }

    if value > max_value {
        return max_value;
    }

    (value + 0.5).trunc()
}

/// Clamps an index into `[0, size-1]`, replicating the nearest edge pixel
/// for samples that fall outside the image extent.
#[inline]
pub fn safe_index(index: i64, size: u32) -> u32 {
    if index < 0 {
        return 0;
    }

    if index >= size as i64 {
        return size - 1;
    }

    index as u32
}

/// Returns the half-open span of the 4 consecutive source indices centered
/// on `center`: `[floor(center) - 1, floor(center) + 3)`.
///
/// Indices outside `[0, size)` are expected at the edges and must be passed
/// through [`safe_index`] before use. Centers outside the axis extent are a
/// caller contract violation and are rejected.
#[inline]
pub fn kernel_bounds(center: f64, size: u32) -> Result<(i64, i64), ResizeError> {
    if center < 0.0 || center >= size as f64 {
        return Err(ResizeError::CoordinateOutOfBounds { center, size });
    }

    let start = center.floor() as i64 - (KERNEL_SIZE as i64 / 2) + 1;
    let end = start + KERNEL_SIZE as i64;

    Ok((start, end))
}

/// Separable bicubic interpolation of a 4x4 sample window at fractional
/// offset `(dx, dy)`.
///
/// Each of the 4 rows is reduced with weights at `(column - 1) - dx`, then
/// the row sums are combined with weights at `(row - 1) - dy`; for a
/// separable kernel this equals the full 2-D convolution. A non-finite
/// result signals non-finite input samples and fails the call rather than
/// being clamped away.
pub fn interpolate_bicubic(window: &KernelWindow, dx: f64, dy: f64) -> Result<f64, ResizeError> {
    if !(0.0..=1.0).contains(&dx) || !(0.0..=1.0).contains(&dy) {
        return Err(ResizeError::FractionOutOfRange { dx, dy });
    }

    let mut result = 0.0;

    for (row, samples) in window.iter().enumerate() {
        let wy = cubic_weight((row as f64 - 1.0) - dy);

        let mut row_sum = 0.0;
        for (col, &sample) in samples.iter().enumerate() {
            let wx = cubic_weight((col as f64 - 1.0) - dx);
            row_sum += sample * wx;
        }

        result += row_sum * wy;
    }

    if !result.is_finite() {
        return Err(ResizeError::NonFiniteValue);
    }

    Ok(result)
}
