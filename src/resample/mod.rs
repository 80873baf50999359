//! Bicubic resampling engine with Mitchell-Netravali weighting.
//!
//! # Module Structure
//! - `kernel`: weight function, clamping/quantization, kernel bounds
//! - `sampler`: generic per-depth scanline loops over a plane view
//!
//! All four pixel layouts (8/16-bit, gray/RGBA) share one algorithm; the
//! dispatch below resolves the channel depth and count once per resize,
//! not per pixel. Channels are interpolated independently, so the filter
//! never mixes R, G, B, A, or gray values.

mod kernel;
mod sampler;

#[cfg(test)]
mod tests_advanced;

use crate::buffer::{ImageBuffer, SampleData};
use crate::error::ResizeError;
use crate::validate::{validate_dimensions, validate_scale_ratio};

pub use kernel::{
    clamp_quantize, cubic_weight, interpolate_bicubic, kernel_bounds, safe_index, KernelWindow,
    KERNEL_SIZE,
};

use sampler::{resize_plane, PlaneView};

/// Resize operation parameters, constructed once per resize call.
#[derive(Debug, Clone, Copy)]
pub struct ResizeConfig {
    pub target_width: u32,
    pub target_height: u32,
    /// 0-100 quality hint, reserved for the encode side. Never affects
    /// resampling fidelity.
    pub quality: u8,
}

impl ResizeConfig {
    pub fn new(target_width: u32, target_height: u32) -> Self {
        ResizeConfig {
            target_width,
            target_height,
            quality: 100,
        }
    }
}

/// Validated bicubic resizer.
#[derive(Debug, Clone)]
pub struct Resizer {
    config: ResizeConfig,
}

impl Resizer {
    /// Validates the target dimensions and captures the configuration.
    /// An out-of-range quality hint is clamped to 100, not rejected.
    pub fn new(mut config: ResizeConfig) -> Result<Self, ResizeError> {
        validate_dimensions(config.target_width, config.target_height)?;

        if config.quality > 100 {
            config.quality = 100;
        }

        Ok(Resizer { config })
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// Resamples `src` to the configured target dimensions.
    pub fn resize(&self, src: &ImageBuffer) -> Result<ImageBuffer, ResizeError> {
        self.resize_with_progress(src, None)
    }

    /// Resamples `src`, reporting per-row progress (0.0-1.0) through the
    /// optional callback. The callback observes the scan; it cannot change
    /// output values.
    pub fn resize_with_progress(
        &self,
        src: &ImageBuffer,
        progress: Option<&mut dyn FnMut(f32)>,
    ) -> Result<ImageBuffer, ResizeError> {
        let (dst_width, dst_height) = (self.config.target_width, self.config.target_height);

        validate_dimensions(src.width(), src.height())?;
        validate_scale_ratio(src.width(), src.height(), dst_width, dst_height)?;

        log::debug!(
            "resizing {}x{} {:?} to {}x{}",
            src.width(),
            src.height(),
            src.format(),
            dst_width,
            dst_height
        );

        let channels = src.format().channels();

        let data = match src.data() {
            SampleData::U8(samples) => {
                let view = PlaneView::new(samples, src.width(), src.height(), channels);
                SampleData::U8(resize_plane(&view, dst_width, dst_height, progress)?)
            }
            SampleData::U16(samples) => {
                let view = PlaneView::new(samples, src.width(), src.height(), channels);
                SampleData::U16(resize_plane(&view, dst_width, dst_height, progress)?)
            }
        };

        // from_raw re-checks length against the target dimensions, which
        // doubles as the output-shape regression guard.
        ImageBuffer::from_raw(src.format(), dst_width, dst_height, data)
    }
}

/// One-shot convenience wrapper around [`Resizer`].
pub fn resize(
    src: &ImageBuffer,
    target_width: u32,
    target_height: u32,
) -> Result<ImageBuffer, ResizeError> {
    Resizer::new(ResizeConfig::new(target_width, target_height))?.resize(src)
}
