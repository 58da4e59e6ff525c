//! Pivotbox CLI
//!
//! Usage:
//!   pivotbox [OPTIONS]
//!
//! Options:
//!   --rect-x / --rect-y    Rectangle anchor position
//!   --angle                Rotation in degrees (clockwise on screen)
//!   --pivot-x / --pivot-y  Pivot offset relative to the anchor
//!   -t, --theme <FILE>     Color theme (TOML format)
//!   -o, --output <FILE>    Write SVG to a file instead of stdout
//!   -c, --corners          Print the corner coordinates instead of SVG

use std::convert::Infallible;
use std::fs;
use std::path::PathBuf;

use clap::Parser;

use pivotbox::{
    render_with_config, CornerReport, Figure, PivotOffset, RectangleState, RenderConfig, Theme,
};

/// Parse a numeric field the way the original input boxes did: anything that
/// is not a number becomes 0.
fn lenient_f64(s: &str) -> Result<f64, Infallible> {
    Ok(s.trim().parse().unwrap_or(0.0))
}

#[derive(Parser)]
#[command(name = "pivotbox")]
#[command(about = "Rotate a 100x100 square about a pivot and report its corners")]
struct Cli {
    /// Rectangle anchor X (lower-left corner before rotation)
    #[arg(long, default_value_t = 0.0, value_parser = lenient_f64, allow_hyphen_values = true)]
    rect_x: f64,

    /// Rectangle anchor Y (lower-left corner before rotation)
    #[arg(long, default_value_t = 0.0, value_parser = lenient_f64, allow_hyphen_values = true)]
    rect_y: f64,

    /// Rotation angle in degrees, clockwise as seen on screen
    #[arg(short, long, default_value_t = 0.0, value_parser = lenient_f64, allow_hyphen_values = true)]
    angle: f64,

    /// Pivot offset X, relative to the rectangle anchor
    #[arg(long, default_value_t = 0.0, value_parser = lenient_f64, allow_hyphen_values = true)]
    pivot_x: f64,

    /// Pivot offset Y, relative to the rectangle anchor
    #[arg(long, default_value_t = 0.0, value_parser = lenient_f64, allow_hyphen_values = true)]
    pivot_y: f64,

    /// Theme file for scene colors (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Write the SVG to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the corner coordinate table instead of SVG
    #[arg(short, long)]
    corners: bool,
}

fn main() {
    let cli = Cli::parse();

    let theme = match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(theme) => theme,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    };

    let figure = Figure::new(
        RectangleState::new(cli.rect_x, cli.rect_y),
        PivotOffset::new(cli.pivot_x, cli.pivot_y),
        cli.angle,
    );

    let report = CornerReport::for_figure(&figure);

    if cli.corners {
        print!("{}", report);
        return;
    }

    let config = RenderConfig::new().with_theme(theme);
    let svg = render_with_config(&figure, config);

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            // When the SVG goes to a file, show the coordinates on stdout
            // like the original side panel did.
            print!("{}", report);
        }
        None => {
            println!("{}", svg);
        }
    }
}
