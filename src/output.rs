//! Encoding resized buffers back to image files.
//!
//! The output format is chosen by file extension, matching the decode side:
//! png, jpg/jpeg, bmp, and tiff. WebP stays decode-only. JPEG honors the
//! quality hint carried by the resize configuration.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};

use crate::buffer::{ImageBuffer, PixelFormat, SampleData};
use crate::error::CodecError;

/// Rebuilds a `DynamicImage` from one of the four supported layouts.
/// Lossless; the inverse of the decode-side mapping.
pub fn image_from_buffer(buffer: &ImageBuffer) -> Result<DynamicImage, CodecError> {
    let (width, height) = (buffer.width(), buffer.height());

    let image = match (buffer.format(), buffer.data()) {
        (PixelFormat::Gray8, SampleData::U8(data)) => {
            image::GrayImage::from_raw(width, height, data.clone())
                .map(DynamicImage::ImageLuma8)
        }
        (PixelFormat::Gray16, SampleData::U16(data)) => {
            image::ImageBuffer::from_raw(width, height, data.clone())
                .map(DynamicImage::ImageLuma16)
        }
        (PixelFormat::Rgba8, SampleData::U8(data)) => {
            image::RgbaImage::from_raw(width, height, data.clone())
                .map(DynamicImage::ImageRgba8)
        }
        (PixelFormat::Rgba16, SampleData::U16(data)) => {
            image::ImageBuffer::from_raw(width, height, data.clone())
                .map(DynamicImage::ImageRgba16)
        }
        _ => None,
    };

    image.ok_or(CodecError::LayoutMismatch)
}

/// Encodes a buffer to `path`, choosing the format from the extension.
pub fn save_image<P: AsRef<Path>>(
    path: P,
    buffer: &ImageBuffer,
    quality: u8,
) -> Result<(), CodecError> {
    let path = path.as_ref();
    let image = image_from_buffer(buffer)?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let format = match ext.as_str() {
        "png" => ImageFormat::Png,
        "jpg" | "jpeg" => ImageFormat::Jpeg,
        "bmp" => ImageFormat::Bmp,
        "tiff" | "tif" => ImageFormat::Tiff,
        other => return Err(CodecError::UnsupportedFormat(other.to_string())),
    };

    if format == ImageFormat::Jpeg {
        let file = File::create(path).map_err(|source| CodecError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality.clamp(1, 100));

        // JPEG is 8-bit and has no alpha; flatten accordingly.
        let flattened = match &image {
            DynamicImage::ImageLuma8(_) => image,
            DynamicImage::ImageLuma16(_) => DynamicImage::ImageLuma8(image.to_luma8()),
            _ => DynamicImage::ImageRgb8(image.to_rgb8()),
        };

        return flattened.write_with_encoder(encoder).map_err(CodecError::Encode);
    }

    image
        .save_with_format(path, format)
        .map_err(CodecError::Encode)
}
