//! Captcha styles by name

use std::fmt;
use std::str::FromStr;

use easycap_core::CaptchaRenderer;
use easycap_fontdb::FontResolver;

use crate::{SimpleCaptcha, SimpleChineseCaptcha, SinaCaptcha};

/// Every captcha style easycap knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Sina,
    Simple,
    SimpleChinese,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Sina, Variant::Simple, Variant::SimpleChinese];

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Sina => "sina",
            Variant::Simple => "simple",
            Variant::SimpleChinese => "simple-chinese",
        }
    }

    /// A renderer for this style; font lookups go through `resolver`
    pub fn renderer(self, resolver: FontResolver) -> Box<dyn CaptchaRenderer> {
        match self {
            Variant::Sina => Box::new(SinaCaptcha::with_resolver(resolver)),
            Variant::Simple => Box::new(SimpleCaptcha),
            Variant::SimpleChinese => Box::new(SimpleChineseCaptcha),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned for names that match no [`Variant`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown captcha variant '{}' (expected one of: sina, simple, simple-chinese)",
            self.0
        )
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "sina" => Ok(Variant::Sina),
            "simple" => Ok(Variant::Simple),
            "simple-chinese" => Ok(Variant::SimpleChinese),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(variant.name().parse::<Variant>(), Ok(variant));
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_underscores() {
        assert_eq!("SINA".parse::<Variant>(), Ok(Variant::Sina));
        assert_eq!("simple_chinese".parse::<Variant>(), Ok(Variant::SimpleChinese));
        assert!("fancy".parse::<Variant>().is_err());
    }

    #[test]
    fn test_renderer_names_match_variant() {
        for variant in Variant::ALL {
            assert_eq!(variant.renderer(FontResolver::bundled()).name(), variant.name());
        }
    }
}
