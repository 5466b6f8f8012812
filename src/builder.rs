//! Avatar URL assembly.
//!
//! The one operation this crate exists for: take an email address and a
//! parameter source, produce
//! `http://www.gravatar.com/avatar/<md5>?s=..&r=..&d=..`.
//!
//! ## Canonicalization
//!
//! Options are visited in the fixed table order (size, rating, default), so
//! the query string always reads `s`, `r`, `d` regardless of how the source
//! stores its keys. An option is dropped — silently, never reported — when:
//!
//! - the source does not supply it;
//! - its value equals the service default (`size=80`, `rating=g`,
//!   `default=""`), which Gravatar would apply anyway;
//! - its value fails validation (size out of range, unknown rating, default
//!   image neither a known generator nor an absolute http(s) URL).
//!
//! A dropped option never poisons its neighbors: `{size: 120, rating: "??"}`
//! still yields `?s=120`.
//!
//! ## Error signal
//!
//! [`build_url`] has exactly one failure mode, an invalid email address, and
//! signals it with an empty string — the contract template callers want,
//! where a bad address renders as nothing rather than aborting the page.
//! [`try_build_url`] exposes the same split as an `Option` for Rust callers.

use serde_json::Value;
use url::form_urlencoded;

use crate::email::EmailAddress;
use crate::params::{DefaultImage, Rating, Size};
use crate::source::{OptionKind, ParamSource};

/// Every avatar URL starts here. Gravatar serves the same content on http
/// and https; the http form is the one the service documents for unsigned
/// requests.
pub const GRAVATAR_URL_PREFIX: &str = "http://www.gravatar.com/avatar/";

/// Build an avatar URL, or `None` if the email address is invalid.
pub fn try_build_url(email: &str, params: &dyn ParamSource) -> Option<String> {
    let email = EmailAddress::parse(email).ok()?;

    let mut pairs: Vec<(&'static str, String)> = Vec::new();
    for option in OptionKind::ALL {
        let Some(value) = params.param(option) else {
            continue;
        };
        if let Some(wire_value) = canonical_value(option, &value) {
            pairs.push((option.wire_key(), wire_value));
        }
    }

    let mut avatar_url = String::with_capacity(GRAVATAR_URL_PREFIX.len() + 32);
    avatar_url.push_str(GRAVATAR_URL_PREFIX);
    avatar_url.push_str(&email.hash());

    if !pairs.is_empty() {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &pairs {
            query.append_pair(key, value);
        }
        avatar_url.push('?');
        avatar_url.push_str(&query.finish());
    }

    Some(avatar_url)
}

/// Build an avatar URL, or `""` if the email address is invalid.
///
/// This is the template-facing contract: no panic, no `Result`, invalid
/// parameter values dropped rather than surfaced.
pub fn build_url(email: &str, params: &dyn ParamSource) -> String {
    try_build_url(email, params).unwrap_or_default()
}

/// Validate one supplied value and return its wire form, or `None` to drop
/// it. Values equal to the service default are dropped before validation —
/// they mirror what Gravatar does unasked.
fn canonical_value(option: OptionKind, value: &Value) -> Option<String> {
    match option {
        OptionKind::Size => {
            let size = value.as_i64()?;
            if size == i64::from(Size::DEFAULT) {
                return None;
            }
            Size::new(size).ok().map(|s| s.to_string())
        }
        OptionKind::Rating => {
            let rating = value.as_str()?;
            if rating.eq_ignore_ascii_case(Rating::default().as_str()) {
                return None;
            }
            rating.parse::<Rating>().ok().map(|r| r.as_str().to_string())
        }
        OptionKind::Default => {
            let default = value.as_str()?;
            // Empty string means "not supplied" — the option's default is
            // unset, so there is nothing to transmit.
            if default.is_empty() {
                return None;
            }
            default
                .parse::<DefaultImage>()
                .ok()
                .map(|d| d.as_query_value().to_string())
        }
    }
}
