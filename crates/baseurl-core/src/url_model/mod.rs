//! Base URL modeling and resolution.
//!
//! Picks a candidate from an injected [`UrlSources`] (site URL first, platform
//! host second, then a fixed local default) and normalizes it so it always
//! carries a scheme and a trailing slash.

mod normalize;

pub use normalize::{ensure_scheme, ensure_trailing_slash, normalize, DEFAULT_SCHEME_PREFIX};

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::error::BaseUrlError;

/// Base URL used when neither candidate is available.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

/// The two optional candidates a base URL is resolved from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSources {
    /// Explicitly configured site URL (first priority).
    pub site_url: Option<String>,
    /// Hostname assigned by the hosting platform (second priority).
    pub platform_host: Option<String>,
}

impl UrlSources {
    pub fn new(site_url: Option<String>, platform_host: Option<String>) -> Self {
        Self {
            site_url,
            platform_host,
        }
    }
}

/// Which candidate a resolved [`BaseUrl`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    SiteUrl,
    PlatformHost,
    Default,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Source::SiteUrl => "site_url",
            Source::PlatformHost => "platform_host",
            Source::Default => "default",
        };
        f.write_str(s)
    }
}

/// A normalized absolute base URL: starts with `http` and ends with `/`.
///
/// Only constructed through resolution, so every value carries the
/// normalization. Cheap to clone; never cached by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BaseUrl(String);

impl BaseUrl {
    fn from_candidate(candidate: &str) -> Self {
        BaseUrl(normalize(candidate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Builds an absolute link by appending `path` to the base.
    ///
    /// Leading slashes on `path` are stripped so the result has exactly one
    /// separator at the join point.
    ///
    /// # Examples
    ///
    /// - base `https://example.com/` + `"/blog/post"` → `"https://example.com/blog/post"`
    /// - base `https://example.com/` + `""` → `"https://example.com/"`
    pub fn join(&self, path: &str) -> String {
        let rest = path.trim_start_matches('/');
        let mut out = String::with_capacity(self.0.len() + rest.len());
        out.push_str(&self.0);
        out.push_str(rest);
        out
    }

    /// Parses the base into a [`url::Url`].
    ///
    /// Fails for values normalization cannot repair, such as `https://` from an
    /// empty candidate.
    pub fn to_url(&self) -> Result<url::Url, BaseUrlError> {
        url::Url::parse(&self.0).map_err(|source| BaseUrlError::Parse {
            value: self.0.clone(),
            source,
        })
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for BaseUrl {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BaseUrl> for String {
    fn from(value: BaseUrl) -> Self {
        value.0
    }
}

impl PartialEq<&str> for BaseUrl {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for BaseUrl {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Resolves the base URL from `sources`, falling back to [`DEFAULT_BASE_URL`].
///
/// Total and side-effect free: the same `sources` always yield the same value.
/// A candidate that is `Some("")` is used as-is (giving `https://`); empty
/// environment values are filtered before they get here, see
/// [`crate::env_source::EmptyValuePolicy`].
pub fn resolve_base_url(sources: &UrlSources) -> BaseUrl {
    resolve_with_source(sources, DEFAULT_BASE_URL).0
}

/// Like [`resolve_base_url`] with a caller-chosen fallback, also reporting which
/// candidate won. The fallback is normalized like any other candidate.
pub fn resolve_with_source(sources: &UrlSources, default: &str) -> (BaseUrl, Source) {
    let (candidate, source) = match (&sources.site_url, &sources.platform_host) {
        (Some(site), _) => (site.as_str(), Source::SiteUrl),
        (None, Some(host)) => (host.as_str(), Source::PlatformHost),
        (None, None) => (default, Source::Default),
    };
    (BaseUrl::from_candidate(candidate), source)
}
