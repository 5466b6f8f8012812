//! maud rendering of avatar `<img>` elements.
//!
//! The template-facing surface: where a Django-style engine would register a
//! `{% gravatar_url %}` tag, maud templates just call a function that
//! returns [`Markup`]. Interpolation is auto-escaped, so the URL (already
//! percent-encoded where it matters) lands in `src` untouched by hand
//! escaping.
//!
//! An invalid email renders as nothing at all — an avatar is decoration,
//! and a broken address should not take the page down with it.

use maud::{Markup, html};

use crate::builder::try_build_url;
use crate::params::{AvatarOptions, Size};
use crate::source::ParamSource;

/// Render `<img src="<avatar url>" ...>` for an email address, or empty
/// markup if the address is invalid.
///
/// Width and height attributes are set to the requested size (Gravatar
/// images are square), defaulting to the service's 80px, so the page layout
/// reserves the right box before the image loads.
pub fn gravatar_img(email: &str, options: &AvatarOptions, alt: &str) -> Markup {
    let size = options.size.unwrap_or_default().get();
    match try_build_url(email, options) {
        Some(avatar_url) => html! {
            img src=(avatar_url) alt=(alt) width=(size) height=(size);
        },
        None => html! {},
    }
}

/// Render the `<img>` from an untyped parameter source (a mapping or struct
/// handed through template data) instead of [`AvatarOptions`].
pub fn gravatar_img_from(email: &str, params: &dyn ParamSource, alt: &str) -> Markup {
    let size = params
        .param(crate::source::OptionKind::Size)
        .and_then(|v| v.as_i64())
        .and_then(|s| Size::new(s).ok())
        .unwrap_or_default()
        .get();
    match try_build_url(email, params) {
        Some(avatar_url) => html! {
            img src=(avatar_url) alt=(alt) width=(size) height=(size);
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DefaultImage, Rating};

    #[test]
    fn img_for_bare_email() {
        let markup = gravatar_img("santa.ant@me.com", &AvatarOptions::default(), "avatar");
        assert_eq!(
            markup.into_string(),
            "<img src=\"http://www.gravatar.com/avatar/73166d43fc3b2dc5f56669ce27984ad0\" \
             alt=\"avatar\" width=\"80\" height=\"80\">"
        );
    }

    #[test]
    fn img_carries_options_and_dimensions() {
        let options = AvatarOptions {
            size: Some(Size::new(120).unwrap()),
            rating: Some(Rating::Pg),
            default: Some(DefaultImage::Identicon),
        };
        let rendered = gravatar_img("santa.ant@me.com", &options, "me").into_string();
        assert!(rendered.contains("?s=120&amp;r=pg&amp;d=identicon"));
        assert!(rendered.contains("width=\"120\""));
        assert!(rendered.contains("height=\"120\""));
    }

    #[test]
    fn invalid_email_renders_nothing() {
        let markup = gravatar_img("santa@ant@com", &AvatarOptions::default(), "avatar");
        assert_eq!(markup.into_string(), "");
    }

    #[test]
    fn untyped_source_drops_bad_size_back_to_default_box() {
        let params = serde_json::json!({"size": 9000, "rating": "x"});
        let rendered = gravatar_img_from("santa.ant@me.com", &params, "x").into_string();
        assert!(rendered.contains("?r=x"));
        assert!(rendered.contains("width=\"80\""));
    }
}
