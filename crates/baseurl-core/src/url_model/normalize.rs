//! Scheme and trailing-slash normalization.

use std::borrow::Cow;

/// Scheme prepended to candidates that do not already start with `http`.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Prepends `https://` unless the value already starts with the literal `http`.
///
/// The check is case-sensitive and only looks at the first four bytes, so both
/// `http://` and `https://` values pass through untouched.
pub fn ensure_scheme(value: &str) -> Cow<'_, str> {
    if value.starts_with("http") {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("{DEFAULT_SCHEME_PREFIX}{value}"))
    }
}

/// Appends `/` unless the value already ends with one.
pub fn ensure_trailing_slash(value: &str) -> Cow<'_, str> {
    if value.ends_with('/') {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("{value}/"))
    }
}

/// Applies both normalizations in order: scheme first, then trailing slash.
pub fn normalize(value: &str) -> String {
    let with_scheme = ensure_scheme(value);
    ensure_trailing_slash(&with_scheme).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_added_to_bare_host() {
        assert_eq!(ensure_scheme("example.com"), "https://example.com");
        assert_eq!(ensure_scheme("localhost:8080"), "https://localhost:8080");
    }

    #[test]
    fn scheme_kept_when_present() {
        assert!(matches!(ensure_scheme("http://a.dev"), Cow::Borrowed(_)));
        assert!(matches!(ensure_scheme("https://a.dev"), Cow::Borrowed(_)));
    }

    #[test]
    fn scheme_check_is_case_sensitive() {
        assert_eq!(ensure_scheme("HTTP://a.dev"), "https://HTTP://a.dev");
    }

    #[test]
    fn scheme_check_is_prefix_only() {
        // Any value starting with "http" is left alone, even a bare host.
        assert_eq!(ensure_scheme("httpbin.org"), "httpbin.org");
    }

    #[test]
    fn trailing_slash() {
        assert_eq!(ensure_trailing_slash("https://a.dev"), "https://a.dev/");
        assert!(matches!(ensure_trailing_slash("https://a.dev/"), Cow::Borrowed(_)));
        assert_eq!(ensure_trailing_slash("https://a.dev//"), "https://a.dev//");
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize(""), "https://");
    }

    #[test]
    fn normalize_with_path() {
        assert_eq!(normalize("a.dev/app"), "https://a.dev/app/");
    }
}
