//! Engine-level behavioral tests across formats, scales, and edge cases.

use super::*;
use crate::buffer::{ImageBuffer, PixelFormat, SampleData};
use crate::error::ResizeError;

fn gray8(width: u32, height: u32, data: Vec<u8>) -> ImageBuffer {
    ImageBuffer::from_raw(PixelFormat::Gray8, width, height, SampleData::U8(data)).unwrap()
}

fn gray16(width: u32, height: u32, data: Vec<u16>) -> ImageBuffer {
    ImageBuffer::from_raw(PixelFormat::Gray16, width, height, SampleData::U16(data)).unwrap()
}

fn u8_samples(buf: &ImageBuffer) -> &[u8] {
    match buf.data() {
        SampleData::U8(v) => v,
        _ => panic!("expected 8-bit samples"),
    }
}

fn u16_samples(buf: &ImageBuffer) -> &[u16] {
    match buf.data() {
        SampleData::U16(v) => v,
        _ => panic!("expected 16-bit samples"),
    }
}

#[test]
fn test_output_dimensions_exact() {
    let src = gray8(7, 5, vec![100u8; 35]);
    let dst = resize(&src, 13, 9).unwrap();
    assert_eq!((dst.width(), dst.height()), (13, 9));
    assert_eq!(u8_samples(&dst).len(), 13 * 9);

    let src = ImageBuffer::new(PixelFormat::Rgba16, 3, 3);
    let dst = resize(&src, 5, 4).unwrap();
    assert_eq!((dst.width(), dst.height()), (5, 4));
    assert_eq!(u16_samples(&dst).len(), 5 * 4 * 4);
}

#[test]
fn test_constant_gray_upscale_stays_constant() {
    // Partition of unity: a solid image resamples to the same value.
    let src = gray8(4, 4, vec![128u8; 16]);
    let dst = resize(&src, 8, 8).unwrap();
    assert!(u8_samples(&dst).iter().all(|&v| v == 128));
}

#[test]
fn test_constant_rgba16_preserved_per_channel() {
    let pixel = [60_000u16, 30_000, 10, 65_535];
    let data: Vec<u16> = pixel.iter().copied().cycle().take(3 * 3 * 4).collect();
    let src =
        ImageBuffer::from_raw(PixelFormat::Rgba16, 3, 3, SampleData::U16(data)).unwrap();

    let dst = resize(&src, 6, 6).unwrap();
    for chunk in u16_samples(&dst).chunks_exact(4) {
        assert_eq!(chunk, &pixel);
    }
}

#[test]
fn test_max_values_do_not_overflow() {
    let src = gray8(5, 5, vec![255u8; 25]);
    let dst = resize(&src, 9, 3).unwrap();
    assert!(u8_samples(&dst).iter().all(|&v| v == 255));

    let src = gray16(5, 5, vec![65_535u16; 25]);
    let dst = resize(&src, 3, 9).unwrap();
    assert!(u16_samples(&dst).iter().all(|&v| v == 65_535));
}

#[test]
fn test_collapse_to_single_pixel() {
    // All four source pixels contribute via edge clamping; bicubic may
    // overshoot the source min/max slightly but never the type bounds.
    let src = gray8(2, 2, vec![10, 20, 30, 40]);
    let dst = resize(&src, 1, 1).unwrap();

    let samples = u8_samples(&dst);
    assert_eq!(samples.len(), 1);
    let v = samples[0];
    assert!((5..=45).contains(&v), "collapsed value {v} far outside source range");
}

#[test]
fn test_identity_resize_interior_within_rounding() {
    // Gentle ramp: interior pixels land within one channel unit of the
    // source since the half-pixel sample centers still apply.
    let data: Vec<u8> = (0..16)
        .map(|i| {
            let (x, y) = (i % 4, i / 4);
            (40 + x + y) as u8
        })
        .collect();
    let src = gray8(4, 4, data.clone());
    let dst = resize(&src, 4, 4).unwrap();

    let out = u8_samples(&dst);
    for y in 1..3u32 {
        for x in 1..3u32 {
            let i = (y * 4 + x) as usize;
            let diff = (out[i] as i32 - data[i] as i32).abs();
            assert!(diff <= 1, "pixel ({x},{y}): {} vs {}", out[i], data[i]);
        }
    }
}

#[test]
fn test_channel_independence() {
    // A red-only image stays red-only: interpolating zeros yields zero.
    let data: Vec<u8> = [200u8, 0, 0, 255].iter().copied().cycle().take(4 * 4 * 4).collect();
    let src = ImageBuffer::from_raw(PixelFormat::Rgba8, 4, 4, SampleData::U8(data)).unwrap();

    let dst = resize(&src, 7, 7).unwrap();
    for chunk in u8_samples(&dst).chunks_exact(4) {
        assert_eq!(chunk[0], 200);
        assert_eq!(chunk[1], 0);
        assert_eq!(chunk[2], 0);
        assert_eq!(chunk[3], 255);
    }
}

#[test]
fn test_format_preserved_across_resize() {
    for format in [
        PixelFormat::Gray8,
        PixelFormat::Gray16,
        PixelFormat::Rgba8,
        PixelFormat::Rgba16,
    ] {
        let src = ImageBuffer::new(format, 6, 6);
        let dst = resize(&src, 3, 12).unwrap();
        assert_eq!(dst.format(), format);
        assert_eq!((dst.width(), dst.height()), (3, 12));
    }
}

#[test]
fn test_ratio_17x_rejected_before_any_work() {
    let src = gray8(10, 10, vec![0u8; 100]);
    let err = resize(&src, 170, 170).unwrap_err();
    assert!(matches!(err, ResizeError::InvalidScaleFactor { .. }));
}

#[test]
fn test_ratio_16x_allowed() {
    let src = gray8(10, 10, vec![7u8; 100]);
    let dst = resize(&src, 160, 160).unwrap();
    assert_eq!((dst.width(), dst.height()), (160, 160));
}

#[test]
fn test_zero_target_dimension_rejected() {
    let err = Resizer::new(ResizeConfig::new(0, 100)).unwrap_err();
    assert!(matches!(err, ResizeError::InvalidDimension { .. }));
}

#[test]
fn test_oversized_target_dimension_rejected() {
    let err = Resizer::new(ResizeConfig::new(65_536, 100)).unwrap_err();
    assert!(matches!(err, ResizeError::InvalidDimension { .. }));
}

#[test]
fn test_quality_hint_clamped_not_rejected() {
    let mut config = ResizeConfig::new(10, 10);
    config.quality = 255;
    let resizer = Resizer::new(config).unwrap();
    assert_eq!(resizer.config().quality, 100);
}

#[test]
fn test_progress_monotonic_and_complete() {
    let src = gray8(4, 4, vec![50u8; 16]);
    let resizer = Resizer::new(ResizeConfig::new(8, 6)).unwrap();

    let mut reported = Vec::new();
    resizer
        .resize_with_progress(&src, Some(&mut |p| reported.push(p)))
        .unwrap();

    assert_eq!(reported.len(), 6);
    assert!(reported.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*reported.last().unwrap(), 1.0);
}

#[test]
fn test_downscale_preserves_left_right_split() {
    // 4x4 with a dark left half and bright right half; the 2x2 result
    // keeps the split on the correct sides.
    let data: Vec<u8> = (0..16)
        .map(|i| if i % 4 < 2 { 0 } else { 255 })
        .collect();
    let src = gray8(4, 4, data);
    let dst = resize(&src, 2, 2).unwrap();

    let out = u8_samples(&dst);
    assert!(out[0] < 128 && out[2] < 128, "left column drifted bright: {out:?}");
    assert!(out[1] > 128 && out[3] > 128, "right column drifted dark: {out:?}");
}
