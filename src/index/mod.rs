//! Gallery index generator module
//!
//! One-shot pipeline: walk the tree, classify media files, render the
//! gallery document, overwrite the output file.

pub mod html;
pub mod media;
pub mod walk;

use std::path::Path;

// Re-export commonly used types
pub use media::MediaKind;
pub use walk::{collect_media, MediaEntry};

/// Generate the gallery for `root` and write it to `output`
///
/// Returns the number of gallery entries written. Errors propagate to the
/// caller; a failed run exits non-zero.
pub fn generate(
    root: &Path,
    base_url: &str,
    ignore_list: &[&str],
    output: &Path,
) -> Result<usize, Box<dyn std::error::Error>> {
    let entries = collect_media(root, ignore_list)?;
    let document = html::render_gallery(base_url, &entries);
    std::fs::write(output, document)?;
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_writes_the_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        let output = dir.path().join("out.html");

        let count = generate(dir.path(), "https://cdn.example.com", &["out.html"], &output)
            .unwrap();

        assert_eq!(count, 1);
        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("https://cdn.example.com/a.jpg"));
    }

    #[test]
    fn test_generate_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.html");
        std::fs::write(&output, "old content").unwrap();

        generate(dir.path(), "https://cdn.example.com", &["out.html"], &output).unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(!html.contains("old content"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
