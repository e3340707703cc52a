//! Page Backgrounds
//!
//! Turns an image (a file on disk or bytes already in memory) into a
//! style directive that paints it as the full-page background, with a dark
//! overlay so light text stays readable.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// An image to embed in a page
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Read from disk at render time; format comes from the extension
    File(PathBuf),
    /// Bytes already in memory, with a format hint such as `png`
    Bytes { data: Arc<[u8]>, format: String },
}

impl ImageSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ImageSource::File(path.into())
    }

    pub fn bytes(data: impl Into<Arc<[u8]>>, format: impl Into<String>) -> Self {
        ImageSource::Bytes {
            data: data.into(),
            format: format.into(),
        }
    }

    /// Load the image, returning `(bytes, normalized format)`
    ///
    /// Missing or unreadable files and empty data yield `None`.
    pub fn load(&self) -> Option<(Arc<[u8]>, String)> {
        match self {
            ImageSource::File(path) => {
                let data = match std::fs::read(path) {
                    Ok(data) => data,
                    Err(e) => {
                        tracing::debug!(path = ?path, error = %e, "Background image not readable");
                        return None;
                    }
                };
                if data.is_empty() {
                    return None;
                }
                Some((Arc::from(data), normalize_format(extension_of(path))))
            }
            ImageSource::Bytes { data, format } => {
                if data.is_empty() {
                    return None;
                }
                Some((Arc::clone(data), normalize_format(format)))
            }
        }
    }
}

fn extension_of(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}

/// Lowercase, strip a leading `.`, map `jpg` to `jpeg`, default to `png`
pub fn normalize_format(format: &str) -> String {
    let format = format.trim().trim_start_matches('.').to_lowercase();
    match format.as_str() {
        "" => "png".to_string(),
        "jpg" => "jpeg".to_string(),
        _ => format,
    }
}

/// `data:image/<format>;base64,<payload>`
pub fn image_data_url(data: &[u8], format: &str) -> String {
    format!(
        "data:image/{};base64,{}",
        normalize_format(format),
        STANDARD.encode(data)
    )
}

/// A block of CSS to be placed in the page head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDirective(String);

impl StyleDirective {
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    pub fn css(&self) -> &str {
        &self.0
    }

    /// `<style>` element wrapping the CSS
    pub fn to_html(&self) -> String {
        format!("<style>\n{}\n</style>", self.0)
    }
}

/// Build the full-page background directive for an image
///
/// Returns `None` when there is nothing to paint.
pub fn render_background(source: Option<&ImageSource>) -> Option<StyleDirective> {
    let (data, format) = source?.load()?;
    let url = image_data_url(&data, &format);

    Some(StyleDirective::new(format!(
        r#".app {{
  background: url("{url}") no-repeat center center fixed;
  background-size: cover;
}}

.app::before {{
  content: "";
  position: fixed;
  inset: 0;
  background: rgba(0,0,0,0.60);
  pointer-events: none;
  z-index: 0;
}}

main.content {{
  position: relative;
  z-index: 1;
}}

.block-container {{
  background: transparent;
}}"#
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_format() {
        assert_eq!(normalize_format("jpg"), "jpeg");
        assert_eq!(normalize_format(".JPG"), "jpeg");
        assert_eq!(normalize_format("PNG"), "png");
        assert_eq!(normalize_format(""), "png");
        assert_eq!(normalize_format("webp"), "webp");
    }

    #[test]
    fn test_image_data_url() {
        assert_eq!(image_data_url(b"abc", "png"), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_absent_source_is_noop() {
        assert!(render_background(None).is_none());
        assert!(render_background(Some(&ImageSource::file("/nonexistent/globe.png"))).is_none());
        assert!(render_background(Some(&ImageSource::bytes(Vec::new(), "png"))).is_none());
    }

    #[test]
    fn test_bytes_background() {
        let source = ImageSource::bytes(b"abc".to_vec(), "jpg");
        let directive = render_background(Some(&source)).unwrap();
        let css = directive.css();

        assert!(css.contains("data:image/jpeg;base64,YWJj"));
        assert!(css.contains("background-size: cover"));
        assert!(css.contains("center center fixed"));
        assert!(css.contains("rgba(0,0,0,0.60)"));
        assert!(css.contains("pointer-events: none"));
        assert!(css.contains("z-index: 1"));
        assert!(css.contains("background: transparent"));
    }

    #[test]
    fn test_file_background_uses_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("globe_background.JPG");
        std::fs::write(&path, b"abc").unwrap();

        let directive = render_background(Some(&ImageSource::file(&path))).unwrap();
        assert!(directive.css().contains("data:image/jpeg;base64,YWJj"));
        assert!(directive.to_html().starts_with("<style>"));
    }
}
