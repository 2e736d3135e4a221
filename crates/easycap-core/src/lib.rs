//! Easycap Core: the shared vocabulary of the captcha pipeline
//!
//! A captcha travels the same short road every time:
//!
//! 1. **Font Selection** - a bundled font is resolved and loaded at a pixel size
//! 2. **Glyph Rendering** - each character is drawn, rotated and cropped
//! 3. **Layout** - glyphs are pasted left-to-right onto a solid background
//! 4. **Resampling** - the composed canvas is resized to the output size
//! 5. **Export** - the caller encodes the bitmap as PNG or JPEG
//!
//! This crate holds the pieces everyone agrees on: [`Color`], [`ImageSize`],
//! [`CaptchaOptions`], the error taxonomy in [`error`] and the
//! [`CaptchaRenderer`] and [`Exporter`] traits.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub mod error;
pub mod traits;

pub use error::{CaptchaError, ExportError, RenderError, Result};
pub use traits::{CaptchaRenderer, Exporter};

/// Font size used when the caller doesn't pick one, in pixels
pub const DEFAULT_FONT_SIZE: f32 = 48.0;

/// Simple RGB color; captchas are always opaque
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Each channel drawn uniformly from 0..=255
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }

    /// The supplied color, or a fresh random one
    pub fn or_random<R: Rng + ?Sized>(color: Option<Color>, rng: &mut R) -> Self {
        color.unwrap_or_else(|| Self::random(rng))
    }

    pub const fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    pub const fn to_rgba(self, alpha: u8) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, alpha])
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse error for hex colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color must be in RRGGBB format, got '{}'", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `RRGGBB` with or without a leading `#`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError(s.to_string()))
        };

        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ImageSize {
    /// The classic 100x50 login-form captcha
    fn default() -> Self {
        Self::new(100, 50)
    }
}

impl From<(u32, u32)> for ImageSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// How a captcha should be rendered
///
/// Every `None` means "let the random source decide" (or, for the
/// background, "let the variant decide").
#[derive(Debug, Clone, PartialEq)]
pub struct CaptchaOptions {
    /// Glyph size in pixels
    pub font_size: f32,
    /// Final output dimensions
    pub image_size: ImageSize,
    /// Background fill; variants pick their own when unset
    pub background: Option<Color>,
    /// Fill for every glyph; each glyph gets its own random color when unset
    pub foreground: Option<Color>,
    /// Rotation in degrees for every glyph; random per glyph when unset
    pub rotation: Option<f32>,
    /// Seed for reproducible output
    pub seed: Option<u64>,
}

impl Default for CaptchaOptions {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            image_size: ImageSize::default(),
            background: None,
            foreground: None,
            rotation: None,
            seed: None,
        }
    }
}

impl CaptchaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_image_size(mut self, size: impl Into<ImageSize>) -> Self {
        self.image_size = size.into();
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// A generator owned by one render call
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                log::debug!("Seeding captcha rng with {}", seed);
                StdRng::seed_from_u64(seed)
            },
            None => StdRng::from_os_rng(),
        }
    }
}
