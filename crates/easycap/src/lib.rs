//! Easycap: captcha images from a string
//!
//! Text goes in, a bitmap comes out. Each character is drawn on its own,
//! turned to a random angle, cropped, and laid out beside its neighbours
//! on a solid background before the whole canvas is resized to the
//! output size.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use easycap::{CaptchaOptions, CaptchaRenderer, SinaCaptcha};
//!
//! let captcha = SinaCaptcha::new();
//!
//! // Classic entry point: 48px glyphs, 100x50 output
//! let image = captcha.make_captcha("A1b2", 48.0, None)?;
//! assert_eq!(image.dimensions(), (100, 50));
//!
//! // Reproducible output for tests
//! let options = CaptchaOptions::new().with_seed(7).with_image_size((160, 60));
//! let image = captcha.render("xK9p", &options)?;
//! # Ok::<(), easycap::CaptchaError>(())
//! ```
//!
//! Rendering is synchronous and stateless. Every call owns its random
//! generator; pass one in through
//! [`CaptchaRenderer::render_with_rng`] to control it completely.

mod simple;
mod sina;
mod variant;

pub use easycap_core::{
    error, CaptchaError, CaptchaOptions, CaptchaRenderer, Color, Exporter, ImageSize, Result,
    DEFAULT_FONT_SIZE,
};
pub use easycap_fontdb::{FontResolver, BUNDLED_FONTS};
pub use simple::{SimpleCaptcha, SimpleChineseCaptcha};
pub use sina::{SinaCaptcha, SINA_FONT};
pub use variant::{UnknownVariant, Variant};

/// Sina-style captcha with bundled fonts and default sizes
pub fn make_captcha(text: &str) -> Result<image::RgbImage> {
    SinaCaptcha::new().make_captcha(text, DEFAULT_FONT_SIZE, None)
}
