//! Web-path string utilities.
//!
//! Pure functions for URL path manipulation. No side effects.
//!
//! - Segment normalization (leading/trailing slash handling)
//! - Joining a public path segment with a matched suffix
//! - Link type detection (external vs internal)

/// Strip a leading slash from a URL path.
///
/// # Examples
/// ```
/// use urlgen::core::strip_leading_slash;
/// assert_eq!(strip_leading_slash("/blog/post"), "blog/post");
/// assert_eq!(strip_leading_slash("blog/post"), "blog/post");
/// assert_eq!(strip_leading_slash("/"), "");
/// ```
#[inline]
pub fn strip_leading_slash(url: &str) -> &str {
    url.strip_prefix('/').unwrap_or(url)
}

/// Normalize a public path segment by trimming one leading and one
/// trailing slash.
///
/// Idempotent: `"css"`, `"/css"`, `"css/"` and `"/css/"` all normalize
/// to `"css"`.
///
/// # Examples
/// ```
/// use urlgen::core::normalize_segment;
/// assert_eq!(normalize_segment("/css/"), "css");
/// assert_eq!(normalize_segment("css"), "css");
/// assert_eq!(normalize_segment("/"), "");
/// ```
#[inline]
pub fn normalize_segment(segment: &str) -> &str {
    let trimmed = segment.strip_prefix('/').unwrap_or(segment);
    trimmed.strip_suffix('/').unwrap_or(trimmed)
}

/// Join a normalized public segment with a matched path suffix, with
/// exactly one `/` between non-empty parts.
///
/// # Examples
/// ```
/// use urlgen::core::join_web_path;
/// assert_eq!(join_web_path("css", "/style.css"), "css/style.css");
/// assert_eq!(join_web_path("", "/style.css"), "style.css");
/// assert_eq!(join_web_path("css", ""), "css");
/// ```
pub fn join_web_path(segment: &str, suffix: &str) -> String {
    let suffix = strip_leading_slash(suffix);
    match (segment.is_empty(), suffix.is_empty()) {
        (true, _) => suffix.to_owned(),
        (_, true) => segment.to_owned(),
        _ => format!("{segment}/{suffix}"),
    }
}

/// Check if a link is external (has a URL scheme like `http:`, `mailto:`).
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```
/// use urlgen::core::is_external_link;
/// assert!(is_external_link("https://example.com"));
/// assert!(!is_external_link("/css/style.css"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_leading_slash() {
        assert_eq!(strip_leading_slash("/blog/post"), "blog/post");
        assert_eq!(strip_leading_slash("blog/post"), "blog/post");
        assert_eq!(strip_leading_slash("/"), "");
        assert_eq!(strip_leading_slash(""), "");
    }

    #[test]
    fn test_normalize_segment_idempotent() {
        for raw in ["/css/", "css/", "/css", "css"] {
            assert_eq!(normalize_segment(raw), "css");
            assert_eq!(normalize_segment(normalize_segment(raw)), "css");
        }
    }

    #[test]
    fn test_normalize_segment_empty() {
        assert_eq!(normalize_segment(""), "");
        assert_eq!(normalize_segment("/"), "");
    }

    #[test]
    fn test_join_web_path() {
        assert_eq!(join_web_path("css", "/style.css"), "css/style.css");
        assert_eq!(join_web_path("css", "/deep/style.css"), "css/deep/style.css");
        assert_eq!(join_web_path("", "/style.css"), "style.css");
        assert_eq!(join_web_path("css", ""), "css");
        assert_eq!(join_web_path("", ""), "");
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/css/style.css"));
        assert!(!is_external_link("./style.css"));
        assert!(!is_external_link("#section"));
    }
}
