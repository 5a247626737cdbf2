//! URL value object: parsing, validation and deterministic alias derivation.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::fmt;
use url::{ParseError, Url};

use crate::error::AppError;
use crate::utils::base62;

/// Path segment under which aliases are served.
pub const ALIAS_PATH_PREFIX: &str = "u";

/// Number of digest bytes that feed the alias.
const ALIAS_DIGEST_BYTES: usize = 16;

/// A URL as submitted by a client, optionally carrying an expiration.
///
/// Parsing is lenient about missing components so that [`UrlValue::validate`]
/// can report precisely what is missing; only structurally broken input is
/// rejected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlValue {
    scheme: String,
    host: String,
    path: String,
    raw: String,
    expires_at: Option<DateTime<Utc>>,
}

impl UrlValue {
    /// Parses a raw URL string.
    ///
    /// - `toto.com` parses with an empty scheme.
    /// - `https://` parses with an empty host.
    /// - `https:example.com` has no authority and parses with an empty host.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the input contains whitespace,
    /// control characters or a malformed percent-escape outside the query,
    /// or cannot be parsed at all (bad port, bad IP literal, ...).
    pub fn parse(raw: &str, expires_at: Option<DateTime<Utc>>) -> Result<Self, AppError> {
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(AppError::InvalidUrl);
        }
        if has_malformed_escape(raw) {
            return Err(AppError::InvalidUrl);
        }

        match Url::parse(raw) {
            Ok(url) => Ok(Self {
                scheme: url.scheme().to_string(),
                host: if has_authority(raw) {
                    host_with_port(&url)
                } else {
                    String::new()
                },
                path: url.path().trim_start_matches('/').to_string(),
                raw: raw.to_string(),
                expires_at,
            }),
            Err(ParseError::RelativeUrlWithoutBase) => Ok(Self {
                scheme: String::new(),
                host: String::new(),
                path: raw.to_string(),
                raw: raw.to_string(),
                expires_at,
            }),
            Err(ParseError::EmptyHost) => Ok(Self {
                scheme: raw
                    .split_once(':')
                    .map(|(scheme, _)| scheme.to_ascii_lowercase())
                    .unwrap_or_default(),
                host: String::new(),
                path: String::new(),
                raw: raw.to_string(),
                expires_at,
            }),
            Err(_) => Err(AppError::InvalidUrl),
        }
    }

    /// Checks that both scheme and host are present, scheme first.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.scheme.is_empty() {
            return Err(AppError::MissingScheme);
        }
        if self.host.is_empty() {
            return Err(AppError::MissingHostname);
        }
        Ok(())
    }

    /// Derives the alias URL for this value under `base_url`.
    ///
    /// The expiration, if any, is carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingScheme`] or [`AppError::MissingHostname`]
    /// if this value is incomplete.
    pub fn shorten(&self, base_url: &str) -> Result<UrlValue, AppError> {
        self.validate()?;
        let shortened = alias_url(base_url, &self.alias());
        UrlValue::parse(&shortened, self.expires_at)
    }

    /// Base-62 alias of the canonical form. Pure function of
    /// `scheme://host/path`.
    pub fn alias(&self) -> String {
        let digest = Sha256::digest(self.canonical().as_bytes());
        base62::encode(&digest[..ALIAS_DIGEST_BYTES])
    }

    /// The form the alias is derived from. Query and fragment are not part of it.
    pub fn canonical(&self) -> String {
        format!("{}://{}/{}", self.scheme, self.host, self.path)
    }

    pub fn expiring(&self) -> bool {
        self.expires_at.is_some()
    }

    /// True iff an expiration is set and lies strictly before `t`.
    pub fn expired_at(&self, t: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < t)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for UrlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Builds the public URL under which `alias` is served.
pub fn alias_url(base_url: &str, alias: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        ALIAS_PATH_PREFIX,
        alias
    )
}

/// True when `scheme:` is followed by `//`. The URL parser would
/// otherwise read `https:example.com` as having host `example.com`.
fn has_authority(raw: &str) -> bool {
    raw.split_once(':')
        .is_some_and(|(_, rest)| rest.starts_with("//"))
}

/// A `%` must introduce two hex digits in the path, authority and
/// fragment. The query is kept verbatim and not checked.
fn has_malformed_escape(raw: &str) -> bool {
    let (before_fragment, fragment) = raw.split_once('#').unwrap_or((raw, ""));
    let before_query = before_fragment
        .split_once('?')
        .map_or(before_fragment, |(head, _)| head);

    [before_query, fragment].iter().any(|part| {
        let bytes = part.as_bytes();
        bytes.iter().enumerate().any(|(i, &b)| {
            b == b'%'
                && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                    && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
        })
    })
}

fn host_with_port(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    const BASE: &str = "https://localhost:8080";

    fn parse(raw: &str) -> UrlValue {
        UrlValue::parse(raw, None).unwrap()
    }

    #[test]
    fn test_parse_components() {
        let url = parse("https://Example.com:8443/a/b?x=1");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host(), "example.com:8443");
        assert_eq!(url.path(), "a/b");
        assert_eq!(url.as_str(), "https://Example.com:8443/a/b?x=1");
        assert_eq!(url.to_string(), "https://Example.com:8443/a/b?x=1");
    }

    #[test]
    fn test_parse_drops_default_port() {
        assert_eq!(parse("https://example.com:443/x").host(), "example.com");
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        assert_eq!(UrlValue::parse("https:// ", None), Err(AppError::InvalidUrl));
        assert_eq!(
            UrlValue::parse("https://exa mple.com", None),
            Err(AppError::InvalidUrl)
        );
        assert_eq!(
            UrlValue::parse("https://example.com/\n", None),
            Err(AppError::InvalidUrl)
        );
    }

    #[test]
    fn test_parse_rejects_broken_structure() {
        assert_eq!(
            UrlValue::parse("https://example.com:99999/", None),
            Err(AppError::InvalidUrl)
        );
        assert_eq!(
            UrlValue::parse("http://[::1/", None),
            Err(AppError::InvalidUrl)
        );
        assert_eq!(
            UrlValue::parse("https://example.com/%zz", None),
            Err(AppError::InvalidUrl)
        );
        assert_eq!(
            UrlValue::parse("https://example.com/%", None),
            Err(AppError::InvalidUrl)
        );
        assert_eq!(
            UrlValue::parse("https://example.com/a#%4", None),
            Err(AppError::InvalidUrl)
        );
    }

    #[test]
    fn test_parse_accepts_valid_escapes() {
        assert_eq!(parse("https://example.com/a%20b").path(), "a%20b");
        assert!(UrlValue::parse("https://example.com/?q=100%", None).is_ok());
    }

    #[test]
    fn test_validate_missing_scheme() {
        assert_eq!(parse("toto.com").validate(), Err(AppError::MissingScheme));
        assert_eq!(parse("").validate(), Err(AppError::MissingScheme));
    }

    #[test]
    fn test_validate_missing_hostname() {
        assert_eq!(parse("https://").validate(), Err(AppError::MissingHostname));
        assert_eq!(
            parse("mailto:someone@example.com").validate(),
            Err(AppError::MissingHostname)
        );
        assert_eq!(parse("https:example.com").validate(), Err(AppError::MissingHostname));
        assert_eq!(
            parse("https:example.com").shorten(BASE),
            Err(AppError::MissingHostname)
        );
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(parse("https://example.com").validate(), Ok(()));
    }

    #[test]
    fn test_shorten_is_deterministic() {
        let a = parse("https://example.com/some/long/path")
            .shorten(BASE)
            .unwrap();
        let b = parse("https://example.com/some/long/path")
            .shorten(BASE)
            .unwrap();

        assert_eq!(a, b);
        assert!(a.as_str().starts_with("https://localhost:8080/u/"));
    }

    #[test]
    fn test_shorten_produces_alphanumeric_alias() {
        let short = parse("https://example.com/page").shorten(BASE).unwrap();
        let alias = short.path().strip_prefix("u/").unwrap();

        assert!(!alias.is_empty());
        assert!(alias.len() <= 22);
        assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_shorten_distinguishes_paths() {
        let first = parse("https://foobar/first").shorten(BASE).unwrap();
        let second = parse("https://foobar/second").shorten(BASE).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_alias_uses_canonical_form() {
        assert_eq!(
            parse("https://EXAMPLE.com/a").alias(),
            parse("https://example.com/a").alias()
        );
        assert_eq!(
            parse("https://example.com/a?utm=1").canonical(),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_shorten_rejects_incomplete_urls() {
        assert_eq!(parse("toto.com").shorten(BASE), Err(AppError::MissingScheme));
        assert_eq!(parse("https://").shorten(BASE), Err(AppError::MissingHostname));
    }

    #[test]
    fn test_shorten_carries_expiration() {
        let at = Utc::now() + Duration::hours(1);
        let url = UrlValue::parse("https://example.com", Some(at)).unwrap();

        let short = url.shorten(BASE).unwrap();
        assert_eq!(short.expires_at(), Some(at));
        assert!(short.expiring());
    }

    #[test]
    fn test_shorten_trims_trailing_slash_of_base() {
        let a = parse("https://example.com").shorten("https://s.test/").unwrap();
        let b = parse("https://example.com").shorten("https://s.test").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_not_expiring() {
        let url = parse("http://blabla.net");
        assert!(!url.expiring());
        assert!(!url.expired_at(Utc::now()));
    }

    #[test]
    fn test_expired_in_the_past() {
        let exp = Utc::now() - Duration::hours(1);
        let url = UrlValue::parse("http://blabla.net", Some(exp)).unwrap();
        assert!(url.expiring());
        assert!(url.expired_at(Utc::now()));
    }

    #[test]
    fn test_not_expired_in_the_future() {
        let exp = Utc::now() + Duration::hours(1);
        let url = UrlValue::parse("http://blabla.net", Some(exp)).unwrap();
        assert!(!url.expired_at(Utc::now()));
    }

    #[test]
    fn test_expiration_boundary_is_strict() {
        let exp = Utc::now();
        let url = UrlValue::parse("http://blabla.net", Some(exp)).unwrap();
        assert!(!url.expired_at(exp));
        assert!(url.expired_at(exp + Duration::milliseconds(1)));
    }

    #[test]
    fn test_alias_url() {
        assert_eq!(alias_url("https://s.test/", "abc"), "https://s.test/u/abc");
    }
}
