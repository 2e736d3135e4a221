//! CLI argument definitions using Clap v4

use clap::{Parser, Subcommand};
use easycap::{Color, Variant};
use easycap_export::ExportFormat;
use std::path::PathBuf;

/// easycap - captcha images from the command line
#[derive(Parser, Debug)]
#[command(name = "easycap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a captcha to an image file
    #[command(alias = "r")]
    Render(Box<RenderArgs>),

    /// List the bundled fonts and whether they resolve
    Fonts(FontsArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Captcha text
    pub text: String,

    /// Output file; the extension picks the format unless --format is given
    #[arg(short = 'o', long = "output", default_value = "captcha.png")]
    pub output: PathBuf,

    /// Glyph size in pixels
    #[arg(short = 's', long = "font-size", default_value_t = easycap::DEFAULT_FONT_SIZE)]
    pub font_size: f32,

    /// Output width in pixels
    #[arg(short = 'W', long = "width", default_value_t = 100)]
    pub width: u32,

    /// Output height in pixels
    #[arg(short = 'H', long = "height", default_value_t = 50)]
    pub height: u32,

    /// Captcha style: sina, simple, simple-chinese
    #[arg(long = "variant", default_value = "sina")]
    pub variant: Variant,

    /// Output format: png, jpeg
    #[arg(short = 'f', long = "format")]
    pub format: Option<ExportFormat>,

    /// JPEG quality (1-100)
    #[arg(long = "quality")]
    pub quality: Option<u8>,

    /// Background color (RRGGBB)
    #[arg(short = 'b', long = "background")]
    pub background: Option<Color>,

    /// Glyph color (RRGGBB); random per glyph when omitted
    #[arg(short = 'c', long = "foreground")]
    pub foreground: Option<Color>,

    /// Fixed rotation in degrees; random per glyph when omitted
    #[arg(short = 'r', long = "rotate", allow_negative_numbers = true)]
    pub rotate: Option<f32>,

    /// Seed for reproducible output
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Directory holding the bundled fonts
    #[arg(long = "font-dir", env = "EASYCAP_FONT_DIR")]
    pub font_dir: Option<PathBuf>,

    /// Suppress status output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose output (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the fonts command
#[derive(Parser, Debug)]
pub struct FontsArgs {
    /// Directory holding the bundled fonts
    #[arg(long = "font-dir", env = "EASYCAP_FONT_DIR")]
    pub font_dir: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
