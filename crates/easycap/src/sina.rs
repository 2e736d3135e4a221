//! The Sina-style captcha
//!
//! One fixed font, every character in its own random color and angle,
//! white background, resized down to a login-form friendly 100x50.

use image::{RgbImage, RgbaImage};
use rand::RngCore;

use easycap_core::{
    error::{CaptchaError, Result},
    CaptchaOptions, CaptchaRenderer, Color, ImageSize,
};
use easycap_fontdb::{Font, FontResolver};
use easycap_render::{compose, resize, GlyphRenderer};

/// The font every Sina-style captcha is drawn with
pub const SINA_FONT: &str = "DejaVuSans.ttf";

/// Sina-style captcha renderer
#[derive(Debug, Clone, Default)]
pub struct SinaCaptcha {
    resolver: FontResolver,
    glyphs: GlyphRenderer,
}

impl SinaCaptcha {
    /// Uses the bundled fonts
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up [`SINA_FONT`] through `resolver`
    pub fn with_resolver(resolver: FontResolver) -> Self {
        Self {
            resolver,
            glyphs: GlyphRenderer::new(),
        }
    }

    pub fn resolver(&self) -> &FontResolver {
        &self.resolver
    }

    /// Render `text` at `font_size`, resized to `image_size` (100x50 when `None`)
    pub fn make_captcha(
        &self,
        text: &str,
        font_size: f32,
        image_size: Option<ImageSize>,
    ) -> Result<RgbImage> {
        let options = CaptchaOptions::new()
            .with_font_size(font_size)
            .with_image_size(image_size.unwrap_or_default());
        self.render(text, &options)
    }

    fn make_glyphs(
        &self,
        text: &str,
        font: &Font,
        options: &CaptchaOptions,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<RgbaImage>> {
        text.chars()
            .map(|ch| {
                self.glyphs
                    .render(font, ch, options.foreground, options.rotation, &mut *rng)
            })
            .collect()
    }
}

impl CaptchaRenderer for SinaCaptcha {
    fn name(&self) -> &'static str {
        "sina"
    }

    fn render_with_rng(
        &self,
        text: &str,
        options: &CaptchaOptions,
        rng: &mut dyn RngCore,
    ) -> Result<RgbImage> {
        if text.is_empty() {
            return Err(CaptchaError::StringRequired);
        }

        let font = self.resolver.load(SINA_FONT, options.font_size)?;
        let glyphs = self.make_glyphs(text, &font, options, rng)?;

        let background = options.background.unwrap_or(Color::white());
        let canvas = compose(&glyphs, Some(background), rng)?;

        log::debug!(
            "Sina captcha: {} chars, canvas {}x{} -> {}",
            glyphs.len(),
            canvas.width(),
            canvas.height(),
            options.image_size
        );
        resize(&canvas, options.image_size)
    }
}
