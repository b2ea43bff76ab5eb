//! Media classification module
//!
//! Decides whether a file belongs in the gallery based on its extension.

/// Media kind of a gallery entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"];
const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "mov"];

/// Classify a path by its extension, case-insensitively
///
/// Returns `None` for files that are neither images nor videos.
pub fn classify(path: &str) -> Option<MediaKind> {
    let (_, ext) = path.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions() {
        assert_eq!(classify("photo.jpg"), Some(MediaKind::Image));
        assert_eq!(classify("a/b/photo.WEBP"), Some(MediaKind::Image));
        assert_eq!(classify("icon.svg"), Some(MediaKind::Image));
    }

    #[test]
    fn test_video_extensions() {
        assert_eq!(classify("clip.mp4"), Some(MediaKind::Video));
        assert_eq!(classify("clip.MOV"), Some(MediaKind::Video));
        assert_eq!(classify("a/clip.webm"), Some(MediaKind::Video));
    }

    #[test]
    fn test_other_files() {
        assert_eq!(classify("notes.txt"), None);
        assert_eq!(classify("archive.tar.gz"), None);
        assert_eq!(classify("no_extension"), None);
    }

    #[test]
    fn test_dotfile_with_media_extension() {
        // ".jpg" has an empty stem but still matches the extension
        assert_eq!(classify(".jpg"), Some(MediaKind::Image));
    }
}
