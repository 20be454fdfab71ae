//! Long URL validation.
//!
//! URLs are checked but never rewritten: the stored value is exactly what the
//! caller submitted (minus surrounding whitespace), so a resolve returns the
//! same string a create received.

use url::Url;

/// Reasons a long URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL is too long ({len} bytes, max {max})")]
    TooLong { len: usize, max: usize },

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Upper bound on accepted URL length, in bytes.
pub const MAX_URL_LENGTH: usize = 8192;

/// Validates that `input` is an absolute HTTP(S) URL with a host.
///
/// Returns the trimmed input on success.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparsable or relative URLs,
/// [`UrlValidationError::UnsupportedProtocol`] for schemes other than
/// `http`/`https` (which rules out `javascript:`, `data:`, `file:` and friends),
/// and [`UrlValidationError::MissingHost`] when no host is present.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_long_url(" https://example.com/a ").unwrap(), "https://example.com/a");
/// assert!(validate_long_url("example.com").is_err());
/// ```
pub fn validate_long_url(input: &str) -> Result<&str, UrlValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if trimmed.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong {
            len: trimmed.len(),
            max: MAX_URL_LENGTH,
        });
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_url() {
        assert_eq!(
            validate_long_url("https://example.com").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_preserves_input_verbatim() {
        let input = "HTTPS://EXAMPLE.COM:443/Path?key=VALUE#anchor";
        assert_eq!(validate_long_url(input).unwrap(), input);
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(
            validate_long_url("  https://example.com/a \n").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_accepts_ip_and_port() {
        assert!(validate_long_url("http://192.168.1.1:8080/api").is_ok());
        assert!(validate_long_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_accepts_query_and_encoded_path() {
        assert!(validate_long_url("https://example.com/search?q=rust&lang=en").is_ok());
        assert!(validate_long_url("https://example.com/path%20with%20spaces").is_ok());
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(matches!(
            validate_long_url("not a url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(matches!(
            validate_long_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(validate_long_url(""), Err(UrlValidationError::Empty)));
        assert!(matches!(validate_long_url("   "), Err(UrlValidationError::Empty)));
    }

    #[test]
    fn test_rejects_other_protocols() {
        for input in [
            "ftp://example.com/file.txt",
            "file:///home/user/document.txt",
            "javascript:alert('xss')",
            "data:text/plain,Hello",
            "mailto:test@example.com",
        ] {
            assert!(
                matches!(
                    validate_long_url(input),
                    Err(UrlValidationError::UnsupportedProtocol)
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_oversized_url() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            validate_long_url(&url),
            Err(UrlValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_accepts_long_but_bounded_url() {
        let url = format!("https://example.com/{}", "a".repeat(2000));
        assert!(validate_long_url(&url).is_ok());
    }
}
