//! Email address normalization, validation, and hashing.
//!
//! Gravatar identifies an account by the MD5 digest of the *normalized*
//! address: surrounding whitespace stripped, everything lowercased. Two
//! strings that differ only in case or padding must therefore collapse to
//! the same [`EmailAddress`] before hashing, or the avatar lookup silently
//! misses.
//!
//! Validation is deliberately shallow — the same `local@domain.tld` pattern
//! Gravatar itself tolerates, not a full RFC 5322 parse. An address that
//! fails it would never resolve to an avatar anyway.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$").unwrap()
});

/// The address failed the `local@domain.tld` pattern after normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a valid email address: {0:?}")]
pub struct InvalidEmail(pub String);

/// A validated, normalized email address.
///
/// Construction via [`EmailAddress::parse`] is the only way to obtain one,
/// so holding an `EmailAddress` means the pattern check already passed and
/// the inner string is trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Normalize (trim + lowercase) and validate an address.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEmail`] if the normalized string does not match the
    /// email pattern.
    pub fn parse(email: &str) -> Result<Self, InvalidEmail> {
        let normalized = email.trim().to_lowercase();
        if EMAIL_RE.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(InvalidEmail(email.to_string()))
        }
    }

    /// The normalized address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MD5 hex digest of the normalized address — the path segment Gravatar
    /// keys avatars on. Always 32 lowercase hex characters.
    pub fn hash(&self) -> String {
        format!("{:x}", md5::compute(self.0.as_bytes()))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_address_passes() {
        let email = EmailAddress::parse("santa.ant@me.com").unwrap();
        assert_eq!(email.as_str(), "santa.ant@me.com");
    }

    #[test]
    fn case_and_padding_normalize() {
        for raw in [
            "Santa.Ant@Me.Com",
            "   santa.ant@me.com",
            "santa.ant@me.com   ",
            "   Santa.Ant@Me.Com    ",
        ] {
            let email = EmailAddress::parse(raw).unwrap();
            assert_eq!(email.as_str(), "santa.ant@me.com");
        }
    }

    #[test]
    fn malformed_addresses_rejected() {
        for raw in [
            "",
            "   ",
            "\\/<>\"\"",
            "@.com",
            "santa.ant.com",
            "santa@ant@com",
        ] {
            assert!(
                EmailAddress::parse(raw).is_err(),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn long_tld_rejected() {
        // Pattern caps the final label at 4 letters.
        assert!(EmailAddress::parse("user@example.photography").is_err());
        assert!(EmailAddress::parse("user@example.info").is_ok());
    }

    #[test]
    fn hash_is_md5_of_normalized() {
        let email = EmailAddress::parse("  Santa.Ant@Me.Com ").unwrap();
        assert_eq!(email.hash(), "73166d43fc3b2dc5f56669ce27984ad0");
    }

    #[test]
    fn hash_is_32_lowercase_hex() {
        let hash = EmailAddress::parse("a@b.cd").unwrap().hash();
        assert_eq!(hash.len(), 32);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
