//! Image decoding into the engine's pixel buffers.
//!
//! Decodes files through the `image` crate with a guessed format, then maps
//! the decoded color type onto one of the four supported layouts. Anything
//! outside those four is normalized to 8-bit RGBA before resampling - a
//! lossy but deterministic fallback.

use std::fs;
use std::path::Path;

use image::{ColorType, DynamicImage, ImageReader};

use crate::buffer::{ImageBuffer, PixelFormat, SampleData};
use crate::error::CodecError;

/// Largest input file accepted (1 GiB). Checked before any decode work.
pub const MAX_FILE_SIZE: u64 = 1_073_741_824;

/// Loads and decodes an image file into an [`ImageBuffer`].
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageBuffer, CodecError> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|source| CodecError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.len() > MAX_FILE_SIZE {
        return Err(CodecError::FileTooLarge {
            size: metadata.len(),
            limit: MAX_FILE_SIZE,
        });
    }

    let image = ImageReader::open(path)
        .map_err(|source| CodecError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .with_guessed_format()
        .map_err(|source| CodecError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(CodecError::Decode)?;

    buffer_from_image(&image)
}

/// Maps a decoded image onto one of the four supported layouts.
///
/// L8, L16, RGBA8, and RGBA16 convert losslessly; every other color type
/// takes the 8-bit RGBA path.
pub fn buffer_from_image(image: &DynamicImage) -> Result<ImageBuffer, CodecError> {
    let (format, data) = match image.color() {
        ColorType::L8 => (
            PixelFormat::Gray8,
            SampleData::U8(image.to_luma8().into_raw()),
        ),
        ColorType::L16 => (
            PixelFormat::Gray16,
            SampleData::U16(image.to_luma16().into_raw()),
        ),
        ColorType::Rgba8 => (
            PixelFormat::Rgba8,
            SampleData::U8(image.to_rgba8().into_raw()),
        ),
        ColorType::Rgba16 => (
            PixelFormat::Rgba16,
            SampleData::U16(image.to_rgba16().into_raw()),
        ),
        other => {
            log::warn!("normalizing {other:?} input to 8-bit RGBA");
            (
                PixelFormat::Rgba8,
                SampleData::U8(image.to_rgba8().into_raw()),
            )
        }
    };

    // Lengths come straight from the decoder; a mismatch here means the
    // decoder handed back a malformed plane.
    ImageBuffer::from_raw(format, image.width(), image.height(), data)
        .map_err(|_| CodecError::LayoutMismatch)
}
