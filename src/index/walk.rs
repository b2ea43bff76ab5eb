//! Directory traversal module
//!
//! Walks the scan root, prunes ignored subtrees without descending into
//! them, and yields gallery entries in filesystem order.

use std::path::Path;

use walkdir::WalkDir;

use super::media::{self, MediaKind};

/// One gallery entry: a media file under the scan root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEntry {
    /// Path relative to the scan root, forward slashes
    pub relative_path: String,
    pub kind: MediaKind,
}

/// Collect all media files under `root`, skipping ignored prefixes
///
/// The ignore list matches relative paths by string prefix, so an ignored
/// directory name excludes its whole subtree and the walk never reads it.
/// Traversal order is whatever the filesystem yields.
pub fn collect_media(root: &Path, ignore_list: &[&str]) -> Result<Vec<MediaEntry>, walkdir::Error> {
    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        let relative = relative_to(root, entry.path());
        relative.is_empty() || !is_ignored(&relative, ignore_list)
    });

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative_path = relative_to(root, entry.path());
        if let Some(kind) = media::classify(&relative_path) {
            entries.push(MediaEntry {
                relative_path,
                kind,
            });
        }
    }
    Ok(entries)
}

/// Relative form of a path under `root`, normalized to forward slashes
fn relative_to(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let text = relative.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Check a relative path against the ignore list (string-prefix match)
fn is_ignored(relative_path: &str, ignore_list: &[&str]) -> bool {
    ignore_list
        .iter()
        .any(|prefix| relative_path.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_collects_media_and_skips_other_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jpg"));
        touch(&dir.path().join("sub/b.mp4"));
        touch(&dir.path().join("sub/notes.txt"));

        let mut entries = collect_media(dir.path(), &[]).unwrap();
        entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].relative_path, "a.jpg");
        assert_eq!(entries[0].kind, MediaKind::Image);
        assert_eq!(entries[1].relative_path, "sub/b.mp4");
        assert_eq!(entries[1].kind, MediaKind::Video);
    }

    #[test]
    fn test_ignored_prefix_excludes_subtree() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("keep/a.png"));
        touch(&dir.path().join(".git/objects/b.png"));
        touch(&dir.path().join("target/debug/c.png"));

        let entries = collect_media(dir.path(), &[".git", "target"]).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].relative_path, "keep/a.png");
    }

    #[test]
    fn test_ignore_matches_file_names_too() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("index.html"));
        touch(&dir.path().join("a.gif"));

        let entries = collect_media(dir.path(), &["index.html"]).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].relative_path, "a.gif");
    }

    #[cfg(unix)]
    #[test]
    fn test_ignored_directory_is_never_descended() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.jpg"));
        let blocked = dir.path().join("secret");
        fs::create_dir(&blocked).unwrap();
        touch(&blocked.join("b.jpg"));

        // A walk into this directory would fail with a permission error
        fs::set_permissions(&blocked, fs::Permissions::from_mode(0o000)).unwrap();

        let result = collect_media(dir.path(), &["secret"]);

        fs::set_permissions(&blocked, fs::Permissions::from_mode(0o755)).unwrap();

        let entries = result.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].relative_path, "a.jpg");
    }
}
