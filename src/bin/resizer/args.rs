//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// High-quality bicubic (Mitchell-Netravali) image resizer.
///
/// Reads png/jpeg/bmp/tiff/webp, writes png/jpeg/bmp/tiff. The target
/// scale factor must stay within 1/16x..16x of the source on each axis.
#[derive(Debug, Parser)]
#[command(name = "resizer", version, about)]
pub struct Args {
    /// Input image file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output image file (format chosen by extension)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Target width in pixels
    #[arg(short = 'w', long)]
    pub width: u32,

    /// Target height in pixels
    #[arg(short = 'H', long)]
    pub height: u32,

    /// JPEG encode quality (1-100); ignored for other formats
    #[arg(short, long, default_value_t = 95)]
    pub quality: u8,

    /// Suppress the progress bar
    #[arg(long)]
    pub quiet: bool,
}
