//! Where captcha fonts come from: resolution and loading for easycap
//!
//! The first stage of the pipeline. A font name is resolved against the
//! bundled font directory (or an explicit path wins), the file is read
//! once, and the resulting [`Font`] is reused for every character of
//! one captcha render.
//!
//! Fonts store their raw data and create parsed views on demand, the
//! same way for metrics and for outlines.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use read_fonts::{FontRef as ReadFontRef, TableProvider};
use skrifa::instance::{LocationRef, Size};
use skrifa::MetadataProvider;

use easycap_core::error::{CaptchaError, RenderError, Result};

mod resolver;

pub use resolver::{bundled_font_dir, FontResolver, BUNDLED_FONTS, FONT_DIR_ENV};

/// A font brought into memory at one pixel size
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    size: f32,
    units_per_em: u16,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("bytes", &self.data.len())
            .field("face_index", &self.face_index)
            .field("size", &self.size)
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

/// How much room one character needs at the font's pixel size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharMetrics {
    /// Glyph the character maps to (0 is `.notdef`)
    pub glyph_id: u32,
    /// Horizontal advance in pixels
    pub advance: f32,
    /// Distance from the top of the line box to the baseline, in pixels
    pub ascent: f32,
    /// Distance below the baseline, in pixels (negative)
    pub descent: f32,
}

impl CharMetrics {
    /// Natural width, rounded up, never zero
    pub fn width(&self) -> u32 {
        (self.advance.ceil() as u32).max(1)
    }

    /// Natural height (ascent to descent), rounded up, never zero
    pub fn height(&self) -> u32 {
        ((self.ascent - self.descent).ceil() as u32).max(1)
    }
}

impl Font {
    /// Opens a font file from disk at the given pixel size
    pub fn from_file(path: impl AsRef<Path>, size: f32) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CaptchaError::FontNotFound(path.display().to_string()),
            _ => RenderError::InvalidFont(format!("{}: {}", path.display(), e)).into(),
        })?;

        log::debug!("Loaded {} bytes of font data from {}", data.len(), path.display());
        Self::from_data(data, size)
    }

    /// Turns raw font bytes into a font at the given pixel size
    pub fn from_data(data: Vec<u8>, size: f32) -> Result<Self> {
        if !(size.is_finite() && size > 0.0) {
            return Err(RenderError::InvalidFont(format!("unusable font size {}", size)).into());
        }

        // Validate the font data by attempting to parse it
        let font_ref = ReadFontRef::from_index(&data, 0)
            .map_err(|e| RenderError::InvalidFont(e.to_string()))?;

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        Ok(Font {
            data,
            face_index: 0,
            size,
            units_per_em,
        })
    }

    /// Raw font bytes as they live in the file
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel size every glyph is rendered at
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The font's internal grid size
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Creates a parsed view on demand
    pub fn font_ref(&self) -> Result<skrifa::FontRef<'_>> {
        skrifa::FontRef::from_index(&self.data, self.face_index)
            .map_err(|e| RenderError::InvalidFont(e.to_string()).into())
    }

    /// Finds which glyph draws this character
    pub fn glyph_id(&self, ch: char) -> Option<u32> {
        let font = self.font_ref().ok()?;
        font.charmap().map(ch).map(|gid| gid.to_u32())
    }

    /// Measures one character the way it would be laid out on its own
    ///
    /// Characters the font doesn't cover fall back to `.notdef`.
    pub fn measure(&self, ch: char) -> Result<CharMetrics> {
        let font = self.font_ref()?;
        let size = Size::new(self.size);
        let location = LocationRef::default();

        let glyph_id = font.charmap().map(ch).unwrap_or_else(|| {
            log::debug!("No glyph for {:?}, using .notdef", ch);
            skrifa::GlyphId::NOTDEF
        });

        let advance = font
            .glyph_metrics(size, location)
            .advance_width(glyph_id)
            .unwrap_or(0.0);
        let line = font.metrics(size, location);

        Ok(CharMetrics {
            glyph_id: glyph_id.to_u32(),
            advance,
            ascent: line.ascent,
            descent: line.descent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_data_is_invalid_font() {
        let err = Font::from_data(vec![0, 1, 2, 3], 48.0).unwrap_err();
        assert!(matches!(
            err,
            CaptchaError::CaptchaCreationFailed(RenderError::InvalidFont(_))
        ));
    }

    #[test]
    fn test_missing_file_is_font_not_found() {
        let err = Font::from_file("/definitely/not/here.ttf", 48.0).unwrap_err();
        assert!(matches!(err, CaptchaError::FontNotFound(_)));
    }

    #[test]
    fn test_metrics_dimensions_round_up() {
        let metrics = CharMetrics {
            glyph_id: 1,
            advance: 20.2,
            ascent: 30.5,
            descent: -8.0,
        };
        assert_eq!(metrics.width(), 21);
        assert_eq!(metrics.height(), 39);
    }

    #[test]
    fn test_zero_advance_still_has_width() {
        let metrics = CharMetrics {
            glyph_id: 0,
            advance: 0.0,
            ascent: 0.0,
            descent: 0.0,
        };
        assert_eq!(metrics.width(), 1);
        assert_eq!(metrics.height(), 1);
    }
}
