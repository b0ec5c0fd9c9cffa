use std::path::PathBuf;

use clap::Parser;

use charcoal::ascii::Renderer;
use charcoal::capture::{CaptureError, FrameSource, UvcCapture};
use charcoal::cli::Args;
use charcoal::color::TermColor;
use charcoal::export::{self, ExportError};
use charcoal::loader::{self, LoadError};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("no input: provide --file or --webcam")]
    MissingInput,

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Resolve the input image path, capturing a webcam snapshot first when
/// requested.
fn resolve_input(args: &Args) -> Result<PathBuf, AppError> {
    if args.webcam {
        let path = UvcCapture::new().capture()?;
        return Ok(path);
    }
    args.file.clone().ok_or(AppError::MissingInput)
}

fn run(args: &Args) -> Result<(), AppError> {
    let input = resolve_input(args)?;
    let grid = loader::load_image(&input, args.max_width)?;

    let renderer = Renderer::new(args.character_map.into(), args.brightness_mode.into())
        .with_invert(args.invert)
        .with_repeat(args.repeat_characters)
        .with_paint(args.paint)
        .with_color(args.color.map(TermColor::from));
    let artwork = renderer.render(&grid);

    if let Some(ref output) = args.output {
        export::write_pdf(&artwork, output)?;
    }

    print!("{}", artwork);
    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
