//! Declared captcha styles that have no rendering behavior yet
//!
//! Both fail loudly with [`CaptchaError::NotImplemented`] instead of
//! handing back an empty image.

use image::RgbImage;
use rand::RngCore;

use easycap_core::{
    error::{CaptchaError, Result},
    CaptchaOptions, CaptchaRenderer,
};

/// Plain latin captcha
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleCaptcha;

impl CaptchaRenderer for SimpleCaptcha {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn render_with_rng(
        &self,
        _text: &str,
        _options: &CaptchaOptions,
        _rng: &mut dyn RngCore,
    ) -> Result<RgbImage> {
        Err(CaptchaError::NotImplemented(self.name()))
    }
}

/// Plain CJK captcha
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleChineseCaptcha;

impl CaptchaRenderer for SimpleChineseCaptcha {
    fn name(&self) -> &'static str {
        "simple-chinese"
    }

    fn render_with_rng(
        &self,
        _text: &str,
        _options: &CaptchaOptions,
        _rng: &mut dyn RngCore,
    ) -> Result<RgbImage> {
        Err(CaptchaError::NotImplemented(self.name()))
    }
}
