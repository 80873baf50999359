//! Generic scanline resampling engine.
//!
//! One algorithm, monomorphized per channel depth (u8/u16) with the channel
//! count (1 for gray, 4 for RGBA) as a runtime parameter. `PlaneView` keeps
//! the loops independent of the concrete buffer layout: the engine only
//! asks for "channel c at (x, y) as f64".

use crate::error::ResizeError;
use crate::resample::kernel::{
    clamp_quantize, interpolate_bicubic, kernel_bounds, safe_index, KernelWindow, KERNEL_SIZE,
};

/// Integer channel depth the engine can quantize into.
pub(crate) trait ChannelDepth: Copy + Default {
    /// Largest representable channel value (255.0 or 65535.0).
    const MAX_VALUE: f64;

    fn to_f64(self) -> f64;

    fn from_quantized(value: f64) -> Self;
}

impl ChannelDepth for u8 {
    const MAX_VALUE: f64 = u8::MAX as f64;

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline(always)]
    fn from_quantized(value: f64) -> Self {
        value as u8
    }
}

impl ChannelDepth for u16 {
    const MAX_VALUE: f64 = u16::MAX as f64;

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline(always)]
    fn from_quantized(value: f64) -> Self {
        value as u16
    }
}

/// Borrowed read-only view of an interleaved sample plane.
pub(crate) struct PlaneView<'a, T> {
    data: &'a [T],
    width: u32,
    height: u32,
    channels: usize,
}

impl<'a, T: ChannelDepth> PlaneView<'a, T> {
    pub(crate) fn new(data: &'a [T], width: u32, height: u32, channels: usize) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * channels);
        PlaneView {
            data,
            width,
            height,
            channels,
        }
    }

    #[inline(always)]
    fn channel(&self, x: u32, y: u32, c: usize) -> f64 {
        let idx = (y as usize * self.width as usize + x as usize) * self.channels + c;
        self.data[idx].to_f64()
    }
}

/// Gathers the 4x4 neighborhood of channel `c` around the given kernel
/// spans, replicating edge pixels for out-of-range indices.
#[inline]
fn gather_window<T: ChannelDepth>(
    src: &PlaneView<'_, T>,
    x_span: (i64, i64),
    y_span: (i64, i64),
    c: usize,
) -> KernelWindow {
    let mut window = [[0.0; KERNEL_SIZE]; KERNEL_SIZE];

    for (ky, sy) in (y_span.0..y_span.1).enumerate() {
        let safe_y = safe_index(sy, src.height);

        for (kx, sx) in (x_span.0..x_span.1).enumerate() {
            let safe_x = safe_index(sx, src.width);
            window[ky][kx] = src.channel(safe_x, safe_y, c);
        }
    }

    window
}

/// Resamples a source plane to `dst_width` x `dst_height`.
///
/// Each destination pixel depends only on the source buffer and its own
/// coordinate, never on neighboring destination pixels, so the scanline
/// order here is purely a traversal choice. The optional progress callback
/// fires once per completed destination row with a 0.0-1.0 fraction.
pub(crate) fn resize_plane<T: ChannelDepth>(
    src: &PlaneView<'_, T>,
    dst_width: u32,
    dst_height: u32,
    mut progress: Option<&mut dyn FnMut(f32)>,
) -> Result<Vec<T>, ResizeError> {
    let x_ratio = src.width as f64 / dst_width as f64;
    let y_ratio = src.height as f64 / dst_height as f64;

    let mut dst =
        Vec::with_capacity(dst_width as usize * dst_height as usize * src.channels);

    for y in 0..dst_height {
        // Half-pixel-center mapping avoids the systematic edge bias of
        // scaling integer coordinates directly.
        let src_y = (y as f64 + 0.5) * y_ratio;
        let y_span = kernel_bounds(src_y, src.height)
            .map_err(|e| sampling_error(0, y, e))?;
        let dy = src_y - src_y.floor();

        for x in 0..dst_width {
            let src_x = (x as f64 + 0.5) * x_ratio;
            let x_span = kernel_bounds(src_x, src.width)
                .map_err(|e| sampling_error(x, y, e))?;
            let dx = src_x - src_x.floor();

            for c in 0..src.channels {
                let window = gather_window(src, x_span, y_span, c);
                let value = interpolate_bicubic(&window, dx, dy)
                    .map_err(|e| sampling_error(x, y, e))?;

                dst.push(T::from_quantized(clamp_quantize(value, T::MAX_VALUE)));
            }
        }

        if let Some(cb) = progress.as_deref_mut() {
            cb((y + 1) as f32 / dst_height as f32);
        }
    }

    Ok(dst)
}

fn sampling_error(x: u32, y: u32, source: ResizeError) -> ResizeError {
    ResizeError::Sampling {
        x,
        y,
        source: Box::new(source),
    }
}
