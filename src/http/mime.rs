//! MIME type detection module
//!
//! Returns a Content-Type based on file extension. The raw proxy mode falls
//! back to this when an upstream response does not declare its own type.

/// Get MIME Content-Type based on file extension
///
/// # Examples
/// ```
/// use randpic::http::mime::get_content_type;
/// assert_eq!(get_content_type(Some("webp")), "image/webp");
/// assert_eq!(get_content_type(Some("mp4")), "video/mp4");
/// assert_eq!(get_content_type(None), "application/octet-stream");
/// ```
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",

        // Video
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mov") => "video/quicktime",

        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("txt" | "csv") => "text/plain; charset=utf-8",
        Some("json") => "application/json",

        // Default
        _ => "application/octet-stream",
    }
}

/// Guess the Content-Type for a URL from its path extension
pub fn guess_for_url(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((_, ext)) => get_content_type(Some(&ext.to_ascii_lowercase())),
        None => get_content_type(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(get_content_type(Some("png")), "image/png");
        assert_eq!(get_content_type(Some("jpeg")), "image/jpeg");
        assert_eq!(get_content_type(Some("mov")), "video/quicktime");
        assert_eq!(get_content_type(Some("csv")), "text/plain; charset=utf-8");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type(Some("xyz")), "application/octet-stream");
        assert_eq!(get_content_type(None), "application/octet-stream");
    }

    #[test]
    fn test_guess_for_url() {
        assert_eq!(guess_for_url("https://cdn.example.com/a/b.webp"), "image/webp");
        assert_eq!(guess_for_url("https://cdn.example.com/v.MP4?sig=abc"), "video/mp4");
        assert_eq!(guess_for_url("https://http.cat/503"), "application/octet-stream");
    }
}
