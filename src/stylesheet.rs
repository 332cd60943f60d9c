//! The built-in stylesheet and its on-disk temporary form.
//!
//! Centralising the CSS here serves two purposes:
//!
//! 1. **Single source of truth** — tweaking the PDF's appearance (fonts,
//!    table borders, code-block background) requires editing exactly one
//!    place.
//!
//! 2. **Testability** — unit tests can inspect the stylesheet text directly
//!    without running pandoc.
//!
//! ## Why a temp file?
//!
//! pandoc's `--css` option takes a file path — it cannot read the stylesheet
//! from an argument or stdin. Writing it to a [`tempfile::NamedTempFile`]
//! gives pandoc a path to open while ensuring removal happens automatically
//! when the [`Stylesheet`] guard is dropped, on success, failure, and panic
//! alike.

use crate::error::Md2PdfError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Styling applied to every conversion.
///
/// Identical across invocations; there is deliberately no way to override it
/// from the CLI.
pub const DEFAULT_STYLESHEET: &str = r#"body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    line-height: 1.6;
    margin: 2em;
    max-width: 50em;
    margin-left: auto;
    margin-right: auto;
}
h1, h2, h3, h4, h5, h6 {
    color: #333;
    margin-top: 1.5em;
}
code {
    background-color: #f5f5f5;
    padding: 0.2em 0.4em;
    border-radius: 3px;
    font-family: "SFMono-Regular", Consolas, "Liberation Mono", Menlo, monospace;
}
pre {
    background-color: #f5f5f5;
    padding: 1em;
    border-radius: 5px;
    overflow-x: auto;
}
blockquote {
    border-left: 4px solid #ddd;
    padding-left: 1em;
    color: #666;
}
table {
    border-collapse: collapse;
    width: 100%;
}
table, th, td {
    border: 1px solid #ddd;
}
th, td {
    padding: 8px;
    text-align: left;
}
img {
    max-width: 100%;
}
"#;

/// The stylesheet written to a scoped temporary file.
///
/// The inner `NamedTempFile` is kept alive for the lifetime of the guard so
/// the file is not removed while pandoc is reading it; dropping the guard
/// deletes it.
pub struct Stylesheet {
    file: NamedTempFile,
}

impl Stylesheet {
    /// Write [`DEFAULT_STYLESHEET`] to a fresh `.css` temp file.
    pub fn materialize() -> Result<Self, Md2PdfError> {
        let mut file = tempfile::Builder::new()
            .prefix("md2pdf-")
            .suffix(".css")
            .tempfile()
            .map_err(|e| Md2PdfError::Stylesheet { source: e })?;

        file.write_all(DEFAULT_STYLESHEET.as_bytes())
            .map_err(|e| Md2PdfError::Stylesheet { source: e })?;
        file.flush()
            .map_err(|e| Md2PdfError::Stylesheet { source: e })?;

        debug!("Wrote stylesheet to {}", file.path().display());
        Ok(Self { file })
    }

    /// Path pandoc should be pointed at via `--css`.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
