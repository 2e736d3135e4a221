//! Font name → font file on disk

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use rand::seq::IndexedRandom;
use rand::Rng;

use easycap_core::error::{CaptchaError, Result};

use crate::Font;

/// Fonts shipped in the workspace `fonts/` directory
pub const BUNDLED_FONTS: [&str; 4] = [
    "DejaVuSans-Bold.ttf",
    "DejaVuSerif-BoldItalic.ttf",
    "DejaVuSans.ttf",
    "DejaVuSansMono-Bold.ttf",
];

/// Overrides the bundled font directory when set
pub const FONT_DIR_ENV: &str = "EASYCAP_FONT_DIR";

static BUNDLED_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Where bundled fonts live
///
/// Checks `EASYCAP_FONT_DIR` on first call, then returns the cached result.
pub fn bundled_font_dir() -> &'static Path {
    BUNDLED_DIR.get_or_init(|| match std::env::var_os(FONT_DIR_ENV) {
        Some(dir) if !dir.is_empty() => {
            let dir = PathBuf::from(dir);
            log::info!("Using font directory {} from {}", dir.display(), FONT_DIR_ENV);
            dir
        },
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fonts"),
    })
}

/// Finds font files by name inside one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontResolver {
    font_dir: PathBuf,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::bundled()
    }
}

impl FontResolver {
    /// Resolves names against `font_dir`
    pub fn new(font_dir: impl Into<PathBuf>) -> Self {
        Self {
            font_dir: font_dir.into(),
        }
    }

    /// Resolves names against the bundled font directory
    pub fn bundled() -> Self {
        Self::new(bundled_font_dir())
    }

    pub fn font_dir(&self) -> &Path {
        &self.font_dir
    }

    /// An explicit path wins over a name; whichever is used must exist
    pub fn resolve(&self, path: Option<&Path>, name: Option<&str>) -> Result<PathBuf> {
        let candidate = match (path, name) {
            (Some(path), _) => path.to_path_buf(),
            (None, Some(name)) if !name.is_empty() => self.font_dir.join(name),
            _ => return Err(CaptchaError::FontNotFound("no font path or name given".into())),
        };

        if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(CaptchaError::FontNotFound(candidate.display().to_string()))
        }
    }

    /// Resolves a font name inside the font directory
    pub fn resolve_name(&self, name: &str) -> Result<PathBuf> {
        self.resolve(None, Some(name))
    }

    /// Picks one of [`BUNDLED_FONTS`] uniformly
    pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
        BUNDLED_FONTS.choose(rng).copied().unwrap_or(BUNDLED_FONTS[0])
    }

    /// Loads a named font at `size` pixels
    pub fn load(&self, name: &str, size: f32) -> Result<Font> {
        let path = self.resolve_name(name)?;
        Font::from_file(path, size)
    }

    /// Loads a font from an explicit path at `size` pixels
    pub fn load_path(&self, path: &Path, size: f32) -> Result<Font> {
        let path = self.resolve(Some(path), None)?;
        Font::from_file(path, size)
    }

    /// Loads a randomly chosen bundled font; a missing pick is an error,
    /// not a reason to try another
    pub fn load_random<R: Rng + ?Sized>(&self, size: f32, rng: &mut R) -> Result<Font> {
        let name = Self::random_name(rng);
        log::debug!("Randomly selected font {}", name);
        self.load(name, size)
    }

    /// Which bundled fonts are actually present
    pub fn available(&self) -> Vec<(&'static str, bool)> {
        BUNDLED_FONTS
            .iter()
            .map(|&name| (name, self.resolve_name(name).is_ok()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_resolve_requires_path_or_name() {
        let resolver = FontResolver::new("/tmp");
        assert!(matches!(
            resolver.resolve(None, None),
            Err(CaptchaError::FontNotFound(_))
        ));
        assert!(matches!(
            resolver.resolve(None, Some("")),
            Err(CaptchaError::FontNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_missing_name_reports_path() {
        let resolver = FontResolver::new("/nonexistent-font-dir");
        match resolver.resolve_name("Nope.ttf") {
            Err(CaptchaError::FontNotFound(msg)) => assert!(msg.contains("Nope.ttf")),
            other => panic!("expected FontNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_random_name_is_bundled() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..32 {
            assert!(BUNDLED_FONTS.contains(&FontResolver::random_name(&mut rng)));
        }
    }

    #[test]
    fn test_directory_is_not_a_font() {
        let dir = std::env::temp_dir();
        let resolver = FontResolver::new(&dir);
        assert!(resolver.resolve(Some(dir.as_path()), None).is_err());
    }
}
