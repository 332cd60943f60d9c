//! Error types for the md2pdf library.
//!
//! Every failure here is fatal: the program performs exactly one conversion
//! per invocation, so there is nothing to recover or retry. Each variant
//! carries enough context to print an actionable message — the path that was
//! missing, the install hint for pandoc, or the diagnostic text pandoc wrote
//! to stderr — so the CLI can surface errors verbatim and exit 1.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the md2pdf library.
#[derive(Debug, Error)]
pub enum Md2PdfError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Markdown file not found: '{path}'\nCheck the path exists and is readable.")]
    InputNotFound { path: PathBuf },

    // ── Tool errors ───────────────────────────────────────────────────────
    /// The pandoc binary could not be located or invoked.
    #[error(
        "pandoc is not installed or not on PATH: {detail}\n\n\
Install it with your package manager:\n\
  • macOS:          brew install pandoc\n\
  • Debian/Ubuntu:  apt install pandoc\n\
  • Fedora:         dnf install pandoc\n\
or download a release from https://pandoc.org/installing.html"
    )]
    PandocMissing { detail: String },

    /// pandoc ran but exited nonzero; its stderr is surfaced verbatim.
    #[error("pandoc failed{}:\n{stderr}", exit_label(.status))]
    ConversionFailed {
        status: Option<i32>,
        stderr: String,
    },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the temporary stylesheet.
    #[error("Failed to create temporary stylesheet: {source}")]
    Stylesheet {
        #[source]
        source: std::io::Error,
    },

    /// pandoc was probed successfully but the real invocation failed to spawn.
    #[error("Failed to run pandoc: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// " (exit code N)" when the child reported one, "" when killed by a signal.
fn exit_label(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" (exit code {code})"),
        None => String::new(),
    }
}
