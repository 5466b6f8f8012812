//! # maud-gravatar
//!
//! Gravatar avatar URLs and `<img>` tags for [maud](https://maud.lambda.xyz/)
//! templates. Give it an email address and optional display parameters, get
//! back `http://www.gravatar.com/avatar/<md5>?s=..&r=..&d=..` — nothing is
//! ever fetched; the avatar service resolves the URL when the browser does.
//!
//! ```
//! use maud_gravatar::builder::build_url;
//! use serde_json::json;
//!
//! let url = build_url("santa.ant@me.com", &json!({"size": 120, "rating": "pg"}));
//! assert_eq!(
//!     url,
//!     "http://www.gravatar.com/avatar/73166d43fc3b2dc5f56669ce27984ad0?s=120&r=pg"
//! );
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`email`] | `EmailAddress` — normalization, pattern validation, MD5 digest |
//! | [`params`] | Typed option values: `Size`, `Rating`, `DefaultImage`, `AvatarOptions` |
//! | [`source`] | `ParamSource` — one lookup capability over mappings and structs |
//! | [`builder`] | URL assembly: canonicalization, default suppression, query encoding |
//! | [`tag`] | maud `<img>` rendering helpers |
//!
//! # Design Decisions
//!
//! ## Empty String as the Only Error
//!
//! [`builder::build_url`] returns `""` for an invalid email and silently
//! drops invalid parameter values. Templates are the calling convention this
//! crate serves, and a template wants a missing avatar to render as nothing,
//! not to propagate an error through the page. Rust callers who do want the
//! distinction use [`builder::try_build_url`] (`Option`) or parse inputs
//! through the typed [`params`] constructors, which return real errors.
//!
//! ## One Parameter Capability, Two Adapters
//!
//! Template data supplies options either as a mapping (`HashMap`, JSON
//! object) or as a struct with named fields. Instead of inspecting types at
//! the call site, everything funnels through [`source::ParamSource`]:
//! mappings implement it directly, structs are projected through
//! [`source::Fields`] via serde. The builder only ever sees
//! `param(option) -> Option<value>`.
//!
//! ## Defaults Are Never Transmitted
//!
//! A parameter equal to the service default (`size=80`, `rating=g`) is
//! omitted from the query string — Gravatar applies the same value unasked,
//! and the shorter URL caches better. This mirrors the option table in
//! [`source::OptionKind`], which also fixes the query order to `s`, `r`, `d`.
//!
//! ## MD5, by Mandate
//!
//! Gravatar keys avatars on the MD5 of the normalized address. This is the
//! service's wire protocol, not a cryptographic choice — a stronger digest
//! would simply never match an avatar.

pub mod builder;
pub mod email;
pub mod params;
pub mod source;
pub mod tag;

pub use builder::{GRAVATAR_URL_PREFIX, build_url, try_build_url};
pub use email::{EmailAddress, InvalidEmail};
pub use params::{AvatarOptions, DefaultImage, ParamError, Rating, Size};
pub use source::{Fields, OptionKind, ParamSource};
