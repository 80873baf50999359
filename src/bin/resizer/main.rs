//! resizer - bicubic image resizing CLI
//!
//! Pipeline: decode input -> validate request -> Mitchell-Netravali
//! bicubic resample -> encode output. All failures print to stderr and
//! exit with code 1; no partial output file is left behind for rejected
//! requests because validation runs before any pixel work.

mod args;
mod logger;

use std::error::Error;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use args::Args;
use resizer::{decode, output, ResizeConfig, Resizer};

// ============================================================================
// Progress Bar
// ============================================================================

/// Print a progress bar to stderr (overwrites the current line)
fn print_progress(label: &str, progress: f32) {
    const BAR_WIDTH: usize = 30;
    let filled = (progress * BAR_WIDTH as f32).round() as usize;
    let empty = BAR_WIDTH.saturating_sub(filled);
    eprint!(
        "\r{}: [{}{}] {:3}%",
        label,
        "=".repeat(filled),
        " ".repeat(empty),
        (progress * 100.0).round() as u32
    );
    let _ = std::io::stderr().flush();
}

/// Clear the progress bar line
fn clear_progress() {
    eprint!("\r{}\r", " ".repeat(60));
    let _ = std::io::stderr().flush();
}

// ============================================================================
// Entry
// ============================================================================

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let source = decode::load_image(&args.input)?;
    log::info!(
        "loaded {} ({}x{}, {:?})",
        args.input.display(),
        source.width(),
        source.height(),
        source.format()
    );

    let mut config = ResizeConfig::new(args.width, args.height);
    config.quality = args.quality;
    let resizer = Resizer::new(config)?;

    let resized = if args.quiet {
        resizer.resize(&source)?
    } else {
        let mut on_progress = |p: f32| print_progress("resizing", p);
        let result = resizer.resize_with_progress(&source, Some(&mut on_progress));
        clear_progress();
        result?
    };

    output::save_image(&args.output, &resized, args.quality)?;
    log::info!(
        "wrote {} ({}x{})",
        args.output.display(),
        resized.width(),
        resized.height()
    );

    Ok(())
}

fn main() -> ExitCode {
    logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Include the cause chain; kernel failures carry the failing
            // destination coordinate as context.
            let mut message = e.to_string();
            let mut cause = e.source();
            while let Some(c) = cause {
                message.push_str(&format!(": {c}"));
                cause = c.source();
            }
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
