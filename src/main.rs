//! Command-line entry point.
//!
//! `generate-pptx <background_image> <layout_json> <output_pptx>`
//!
//! Usage problems and a missing background image are reported to stderr with
//! exit code 1. Malformed layout JSON propagates as an error through the
//! same path. On success the output path is printed to stdout.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use generate_pptx::convert::build_presentation;
use generate_pptx::layout::Layout;
use generate_pptx::Result;

/// Generate an editable PowerPoint file from a background image + text layout.
///
/// The layout JSON contains width/height (pixels) and an array of text
/// elements with position, font, size, color, and anchor information.
/// Positions are converted from pixels to inches at 300 DPI.
#[derive(Parser, Debug)]
#[command(name = "generate-pptx", version)]
struct Args {
    /// Background image that fills the slide
    background_image: PathBuf,

    /// JSON layout description
    layout_json: PathBuf,

    /// Output .pptx path
    output_pptx: PathBuf,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage errors exit 1; --help/--version exit 0
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        },
    };

    if !args.background_image.exists() {
        eprintln!(
            "Error: Background image not found: {}",
            args.background_image.display()
        );
        return ExitCode::from(1);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(1)
        },
    }
}

fn run(args: &Args) -> Result<()> {
    let image = fs::read(&args.background_image)?;
    let json = fs::read(&args.layout_json)?;
    let layout = Layout::from_slice(&json)?;

    let pres = build_presentation(&layout, image)?;
    pres.save(&args.output_pptx)?;

    println!("{}", args.output_pptx.display());
    Ok(())
}
