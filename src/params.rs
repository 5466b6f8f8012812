//! Typed avatar display parameters.
//!
//! These types are the validated form of the three options Gravatar accepts
//! on an avatar URL. They sit between the untyped [`source`](crate::source)
//! layer (which hands back whatever a mapping or struct contained) and the
//! [`builder`](crate::builder) (which only ever emits values that parsed).
//!
//! ## Types
//!
//! - [`Size`] — pixel size of the (square) image, 1–512. Gravatar's default is 80.
//! - [`Rating`] — maximum content rating to serve: g, pg, r, or x. Default g.
//! - [`DefaultImage`] — what to serve when no avatar exists: a named
//!   generator, `404`, or a caller-hosted absolute http(s) image URL.
//! - [`AvatarOptions`] — all three, each optional. Unset means "use
//!   Gravatar's default", which the builder then omits from the query string.
//!
//! Parsing is case-insensitive and canonicalizes to lowercase, so `"PG"`
//! round-trips as `pg` — the form every Gravatar document writes.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Shape check for caller-hosted fallback images. A deliberate pattern match
/// rather than a URL parse: WHATWG parsers normalize `http:/host` to
/// `http://host`, accepting exactly the malformed values this must drop.
static ABSOLUTE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://[A-Z0-9.-]+(?::\d+)?(?:/\S*)?$").unwrap()
});

/// A parameter value that cannot be sent to Gravatar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("size {0} is outside {min}..={max}", min = Size::MIN, max = Size::MAX)]
    SizeOutOfRange(i64),
    #[error("size must be a whole number, got {0:?}")]
    SizeNotInteger(String),
    #[error("unknown rating {0:?} (expected g, pg, r, or x)")]
    UnknownRating(String),
    #[error(
        "unknown default image {0:?} (expected identicon, monsterid, wavatar, \
         404, or an absolute http(s) URL)"
    )]
    UnknownDefault(String),
}

/// Requested avatar size in pixels (1–512).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size(u16);

impl Size {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 512;
    /// The size Gravatar serves when none is requested.
    pub const DEFAULT: u16 = 80;

    /// # Errors
    ///
    /// Returns [`ParamError::SizeOutOfRange`] outside 1..=512.
    pub fn new(value: i64) -> Result<Self, ParamError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u16))
        } else {
            Err(ParamError::SizeOutOfRange(value))
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Size {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ParamError::SizeNotInteger(s.to_string()))?;
        Self::new(value)
    }
}

/// Maximum content rating of avatars to serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rating {
    /// Suitable for any audience — Gravatar's default.
    #[default]
    G,
    Pg,
    R,
    X,
}

impl Rating {
    /// Wire value, as it appears after `r=`.
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::G => "g",
            Rating::Pg => "pg",
            Rating::R => "r",
            Rating::X => "x",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "g" => Ok(Rating::G),
            "pg" => Ok(Rating::Pg),
            "r" => Ok(Rating::R),
            "x" => Ok(Rating::X),
            _ => Err(ParamError::UnknownRating(s.to_string())),
        }
    }
}

/// Image served for addresses with no Gravatar account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultImage {
    /// Geometric pattern generated from the email hash.
    Identicon,
    /// Generated monster face.
    Monsterid,
    /// Generated face.
    Wavatar,
    /// Respond with HTTP 404 instead of an image.
    NotFound,
    /// Caller-hosted fallback image. Held unescaped; the builder
    /// form-encodes it into the query string.
    Url(String),
}

impl DefaultImage {
    /// Wire value, as it appears after `d=` (before percent-encoding).
    pub fn as_query_value(&self) -> &str {
        match self {
            DefaultImage::Identicon => "identicon",
            DefaultImage::Monsterid => "monsterid",
            DefaultImage::Wavatar => "wavatar",
            DefaultImage::NotFound => "404",
            DefaultImage::Url(url) => url,
        }
    }
}

impl fmt::Display for DefaultImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl FromStr for DefaultImage {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "identicon" => Ok(DefaultImage::Identicon),
            "monsterid" => Ok(DefaultImage::Monsterid),
            "wavatar" => Ok(DefaultImage::Wavatar),
            "404" => Ok(DefaultImage::NotFound),
            _ if ABSOLUTE_URL_RE.is_match(s) => Ok(DefaultImage::Url(s.to_string())),
            _ => Err(ParamError::UnknownDefault(s.to_string())),
        }
    }
}

/// Typed parameter set. The convenient source when the caller is Rust code
/// rather than loosely-typed template data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvatarOptions {
    pub size: Option<Size>,
    pub rating: Option<Rating>,
    pub default: Option<DefaultImage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_accepts_bounds() {
        assert_eq!(Size::new(1).unwrap().get(), 1);
        assert_eq!(Size::new(512).unwrap().get(), 512);
    }

    #[test]
    fn size_rejects_outside_bounds() {
        assert_eq!(Size::new(0), Err(ParamError::SizeOutOfRange(0)));
        assert_eq!(Size::new(513), Err(ParamError::SizeOutOfRange(513)));
        assert_eq!(Size::new(-80), Err(ParamError::SizeOutOfRange(-80)));
    }

    #[test]
    fn size_parses_from_str() {
        assert_eq!("120".parse::<Size>().unwrap().get(), 120);
        assert!(matches!(
            "12.5".parse::<Size>(),
            Err(ParamError::SizeNotInteger(_))
        ));
    }

    #[test]
    fn size_default_is_gravatar_default() {
        assert_eq!(Size::default().get(), 80);
    }

    #[test]
    fn rating_parses_case_insensitively() {
        assert_eq!("pg".parse::<Rating>().unwrap(), Rating::Pg);
        assert_eq!("PG".parse::<Rating>().unwrap(), Rating::Pg);
        assert_eq!("X".parse::<Rating>().unwrap(), Rating::X);
    }

    #[test]
    fn rating_rejects_unknown() {
        assert!(matches!(
            "f".parse::<Rating>(),
            Err(ParamError::UnknownRating(_))
        ));
    }

    #[test]
    fn rating_canonical_form_is_lowercase() {
        assert_eq!("R".parse::<Rating>().unwrap().as_str(), "r");
    }

    #[test]
    fn default_image_named_generators() {
        assert_eq!(
            "IDENTICON".parse::<DefaultImage>().unwrap(),
            DefaultImage::Identicon
        );
        assert_eq!(
            "404".parse::<DefaultImage>().unwrap(),
            DefaultImage::NotFound
        );
    }

    #[test]
    fn default_image_accepts_absolute_url() {
        let d = "http://example.com/images/example.jpg"
            .parse::<DefaultImage>()
            .unwrap();
        assert_eq!(
            d,
            DefaultImage::Url("http://example.com/images/example.jpg".into())
        );
        assert!("https://cdn.example.com:8443/a.png".parse::<DefaultImage>().is_ok());
    }

    #[test]
    fn default_image_rejects_malformed_urls() {
        for raw in [
            "http:/example.com/images/example.jpg",
            "http//example.com/images/example.jpg",
            "ftp://example.com/a.png",
            "nonexistent",
            "",
        ] {
            assert!(
                matches!(raw.parse::<DefaultImage>(), Err(ParamError::UnknownDefault(_))),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn default_image_url_kept_verbatim() {
        let raw = "http://example.com/images/example.jpg";
        assert_eq!(raw.parse::<DefaultImage>().unwrap().as_query_value(), raw);
    }
}
