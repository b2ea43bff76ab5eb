//! Gallery rendering module
//!
//! Renders the static gallery document: a responsive grid of previews, a
//! lightbox modal for images, and copy-to-clipboard buttons carrying the
//! full CDN URLs. Videos link straight to the media URL instead of opening
//! the modal.

use super::media::MediaKind;
use super::walk::MediaEntry;

const GALLERY_HEAD: &str = r##"<!DOCTYPE html>
<html lang="zh">
<head>
  <meta charset="UTF-8">
  <title>CDN 文件索引</title>
  <style>
    body { font-family: sans-serif; padding: 2rem; background: #f9f9f9; }
    ul { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 1.5rem; list-style: none; padding: 0; }
    li { background: white; padding: 1rem; border-radius: 10px; box-shadow: 0 2px 6px rgba(0,0,0,0.05); overflow: hidden; word-break: break-all; position: relative; display: flex; flex-direction: column; align-items: center; }
    .preview img, .preview video {
      width: 100%;
      max-height: 140px;
      object-fit: cover;
      border-radius: 6px;
      box-shadow: 0 2px 8px rgba(0,0,0,0.08);
    }
    .preview div {
      margin-top: 0.5rem;
      font-size: 0.85rem;
      color: #333;
      text-align: center;
    }
    .preview {
      text-decoration: none;
      color: inherit;
      display: block;
      cursor: pointer;
      width: 100%;
    }
    .modal {
      display: none;
      position: fixed;
      z-index: 99;
      top: 0; left: 0;
      width: 100vw; height: 100vh;
      background: rgba(0, 0, 0, 0.85);
      justify-content: center;
      align-items: center;
    }
    .modal img {
      max-width: 90%;
      max-height: 90%;
      border-radius: 10px;
      box-shadow: 0 0 20px rgba(255,255,255,0.2);
    }

    .copy-btn {
      margin-top: 10px;
      padding: 6px 16px;
      font-size: 14px;
      background: #4caf50;
      color: white;
      border: none;
      border-radius: 999px;
      cursor: pointer;
      box-shadow: 0 2px 6px rgba(0,0,0,0.1);
      transition: background 0.2s ease;
    }
    .copy-btn:hover {
      background: #43a047;
    }
  </style>
</head>
<body>
  <h1>📦 CDN 文件索引</h1>
  <ul>
"##;

const GALLERY_FOOT: &str = r##"
  </ul>

  <div class="modal" id="modal">
    <img id="modal-img" src="" alt="预览大图">
  </div>

  <script>
    const modal = document.getElementById('modal');
    const modalImg = document.getElementById('modal-img');

    document.querySelectorAll('.preview').forEach(link => {
      const img = link.querySelector('img');
      if (img) {
        link.addEventListener('click', (e) => {
          e.preventDefault();
          modalImg.src = link.dataset.full;
          modal.style.display = 'flex';
        });
      }
    });

    modal.addEventListener('click', () => {
      modal.style.display = 'none';
      modalImg.src = '';
    });

    document.querySelectorAll('.copy-btn').forEach(btn => {
      btn.addEventListener('click', () => {
        const url = btn.dataset.url;
        navigator.clipboard.writeText(url).then(() => {
          btn.textContent = "✅ 已复制";
          setTimeout(() => btn.textContent = "复制", 1500);
        });
      });
    });
  </script>
</body>
</html>
"##;

/// Render one image entry: inline preview, modal trigger, copy button
fn render_image(url: &str, relative_path: &str) -> String {
    format!(
        r##"
    <li>
      <a href="#" class="preview" data-full="{url}">
        <img src="{url}" alt="{relative_path}" loading="lazy" />
        <div>{relative_path}</div>
      </a>
      <button class="copy-btn" data-url="{url}">复制</button>
    </li>"##
    )
}

/// Render one video entry: inline player, direct link, copy button
fn render_video(url: &str, relative_path: &str) -> String {
    format!(
        r#"
    <li>
      <a href="{url}" class="preview" data-full="{url}">
        <video src="{url}" preload="metadata" muted playsinline controls></video>
        <div>{relative_path}</div>
      </a>
      <button class="copy-btn" data-url="{url}">复制</button>
    </li>"#
    )
}

/// Render the complete gallery document
pub fn render_gallery(base_url: &str, entries: &[MediaEntry]) -> String {
    let mut html = String::from(GALLERY_HEAD);
    for entry in entries {
        let url = format!("{}/{}", base_url, entry.relative_path);
        let item = match entry.kind {
            MediaKind::Image => render_image(&url, &entry.relative_path),
            MediaKind::Video => render_video(&url, &entry.relative_path),
        };
        html.push_str(&item);
    }
    html.push_str(GALLERY_FOOT);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_URL: &str = "https://cdn.example.com";

    fn entry(relative_path: &str, kind: MediaKind) -> MediaEntry {
        MediaEntry {
            relative_path: relative_path.to_string(),
            kind,
        }
    }

    #[test]
    fn test_every_entry_appears_exactly_once() {
        let entries = vec![
            entry("a/one.jpg", MediaKind::Image),
            entry("two.mp4", MediaKind::Video),
        ];
        let html = render_gallery(BASE_URL, &entries);

        assert_eq!(
            html.matches("https://cdn.example.com/a/one.jpg").count(),
            3, // img src, data-full, copy button
        );
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_image_entry_markup() {
        let html = render_gallery(BASE_URL, &[entry("pic.webp", MediaKind::Image)]);
        assert!(html.contains(r#"<img src="https://cdn.example.com/pic.webp""#));
        assert!(html.contains(r#"loading="lazy""#));
        // Images open the modal, not the URL
        assert!(html.contains(r##"<a href="#" class="preview" data-full="https://cdn.example.com/pic.webp""##));
        assert!(html.contains(r#"data-url="https://cdn.example.com/pic.webp""#));
    }

    #[test]
    fn test_video_entry_markup() {
        let html = render_gallery(BASE_URL, &[entry("clip.mp4", MediaKind::Video)]);
        assert!(html.contains(r#"<video src="https://cdn.example.com/clip.mp4""#));
        // Videos link straight to the media URL
        assert!(html.contains(r#"<a href="https://cdn.example.com/clip.mp4" class="preview""#));
    }

    #[test]
    fn test_empty_gallery_is_still_a_document() {
        let html = render_gallery(BASE_URL, &[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<ul>"));
        assert!(html.ends_with("</html>\n"));
        assert!(!html.contains("<li>"));
    }
}
