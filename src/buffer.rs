//! Owned pixel buffers with interleaved channel samples.
//!
//! An [`ImageBuffer`] is a rectangular grid of pixels in one of four fixed
//! layouts (8/16-bit, gray/RGBA). The resampling engine consumes and
//! produces these; the decode/encode layer converts them to and from
//! concrete file formats.

use crate::error::ResizeError;

/// Pixel representation of a buffer: channel count and bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 1 channel, 8 bits
    Gray8,
    /// 1 channel, 16 bits
    Gray16,
    /// 4 channels (RGBA), 8 bits each
    Rgba8,
    /// 4 channels (RGBA), 16 bits each
    Rgba16,
}

impl PixelFormat {
    /// Channels per pixel (1 or 4).
    #[inline]
    pub fn channels(&self) -> usize {
        match self {
            PixelFormat::Gray8 | PixelFormat::Gray16 => 1,
            PixelFormat::Rgba8 | PixelFormat::Rgba16 => 4,
        }
    }

    /// Bits per channel (8 or 16).
    #[inline]
    pub fn bit_depth(&self) -> u32 {
        match self {
            PixelFormat::Gray8 | PixelFormat::Rgba8 => 8,
            PixelFormat::Gray16 | PixelFormat::Rgba16 => 16,
        }
    }
}

/// Interleaved channel samples at the format's bit depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleData {
    U8(Vec<u8>),
    U16(Vec<u16>),
}

impl SampleData {
    fn len(&self) -> usize {
        match self {
            SampleData::U8(v) => v.len(),
            SampleData::U16(v) => v.len(),
        }
    }
}

/// A width x height grid of pixels with a fixed [`PixelFormat`].
///
/// Owned by the caller before and after resampling; the engine never
/// retains a reference beyond the call that produces the output buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: SampleData,
}

impl ImageBuffer {
    /// Builds a buffer from interleaved samples, enforcing
    /// `data.len() == width * height * channels` and that the sample width
    /// matches the format's bit depth.
    pub fn from_raw(
        format: PixelFormat,
        width: u32,
        height: u32,
        data: SampleData,
    ) -> Result<Self, ResizeError> {
        let expected = width as usize * height as usize * format.channels();
        if data.len() != expected {
            return Err(ResizeError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }

        let depth_matches = matches!(
            (&data, format.bit_depth()),
            (SampleData::U8(_), 8) | (SampleData::U16(_), 16)
        );
        if !depth_matches {
            return Err(ResizeError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }

        Ok(ImageBuffer {
            width,
            height,
            format,
            data,
        })
    }

    /// Zero-filled buffer of the given format and dimensions.
    pub fn new(format: PixelFormat, width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * format.channels();
        let data = match format.bit_depth() {
            8 => SampleData::U8(vec![0u8; len]),
            _ => SampleData::U16(vec![0u16; len]),
        };
        ImageBuffer {
            width,
            height,
            format,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    pub fn data(&self) -> &SampleData {
        &self.data
    }

    /// Consumes the buffer, returning its samples.
    pub fn into_data(self) -> SampleData {
        self.data
    }
}
