use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum SlugError {
    #[error("invalid permalink: {0}")]
    Invalid(#[from] url::ParseError),
    #[error("permalink has no slug segment")]
    NoSlug,
}

/// Extract the post slug from a permalink: the last non-empty path segment.
///
/// `https://blog.test/2024/05/hello-world/` and `https://blog.test/hello-world`
/// both yield `hello-world`. Query and fragment are ignored.
pub fn slug_from_permalink(permalink: &str) -> Result<String, SlugError> {
    let url = Url::parse(permalink.trim())?;
    url.path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
        .map(str::to_string)
        .ok_or(SlugError::NoSlug)
}

/// Host of a permalink, if it parses; used to flag URLs that point at another site.
pub fn permalink_host(permalink: &str) -> Option<String> {
    Url::parse(permalink.trim()).ok()?.host_str().map(|h| h.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_permalink() {
        assert_eq!(slug_from_permalink("https://site/a/").unwrap(), "a");
        assert_eq!(
            slug_from_permalink("https://blog.test/2024/05/hello-world/").unwrap(),
            "hello-world"
        );
    }

    #[test]
    fn missing_trailing_slash_still_yields_slug() {
        assert_eq!(slug_from_permalink("https://blog.test/hello-world").unwrap(), "hello-world");
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(
            slug_from_permalink("https://blog.test/hello-world/?utm_source=x#comments").unwrap(),
            "hello-world"
        );
    }

    #[test]
    fn bare_site_has_no_slug() {
        assert!(matches!(slug_from_permalink("https://blog.test/"), Err(SlugError::NoSlug)));
        assert!(matches!(slug_from_permalink("https://blog.test"), Err(SlugError::NoSlug)));
    }

    #[test]
    fn relative_or_garbage_input_is_invalid() {
        let err = slug_from_permalink("hello-world/").unwrap_err();
        assert!(matches!(err, SlugError::Invalid(_)));
        assert!(err.to_string().starts_with("invalid permalink"));
    }

    #[test]
    fn host_is_lowercased() {
        assert_eq!(permalink_host("https://Blog.Test/a/").as_deref(), Some("blog.test"));
        assert_eq!(permalink_host("nope"), None);
    }
}
