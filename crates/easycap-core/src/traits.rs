//! The contracts that bind the captcha pipeline together
//!
//! - [`CaptchaRenderer`] - Where text becomes a captcha image
//! - [`Exporter`] - Where images become bytes

use image::RgbImage;
use rand::RngCore;

use crate::{error::Result, CaptchaOptions};

/// One captcha style, from text to finished bitmap
///
/// Implementors only provide [`render_with_rng`](Self::render_with_rng);
/// [`render`](Self::render) builds a fresh random source per call from
/// the options, so no generator is ever shared between calls.
///
/// ```ignore
/// struct Plain;
///
/// impl CaptchaRenderer for Plain {
///     fn name(&self) -> &'static str {
///         "plain"
///     }
///
///     fn render_with_rng(
///         &self,
///         text: &str,
///         options: &CaptchaOptions,
///         rng: &mut dyn RngCore,
///     ) -> Result<RgbImage> {
///         Ok(RgbImage::new(options.image_size.width, options.image_size.height))
///     }
/// }
/// ```
pub trait CaptchaRenderer: Send + Sync {
    /// Used for logging and variant lookup
    fn name(&self) -> &'static str;

    /// Render `text` drawing every random decision from `rng`
    fn render_with_rng(
        &self,
        text: &str,
        options: &CaptchaOptions,
        rng: &mut dyn RngCore,
    ) -> Result<RgbImage>;

    /// Render `text` with a generator seeded from `options.seed`, or from
    /// OS entropy when no seed is set
    fn render(&self, text: &str, options: &CaptchaOptions) -> Result<RgbImage> {
        let mut rng = options.rng();
        self.render_with_rng(text, options, &mut rng)
    }
}

/// The final step: pixels become bytes
pub trait Exporter: Send + Sync {
    /// Who are you?
    fn name(&self) -> &'static str;

    /// Encode the rendered captcha
    fn export(&self, image: &RgbImage) -> Result<Vec<u8>>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;

    /// What MIME type identifies your format?
    fn mime_type(&self) -> &'static str;
}
