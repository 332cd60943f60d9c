//! # md2pdf
//!
//! Convert a Markdown document to PDF by shelling out to [pandoc].
//!
//! ## Why this crate?
//!
//! pandoc already does Markdown-to-PDF conversion better than any
//! reimplementation could; what it lacks is a zero-thought invocation. This
//! crate supplies exactly that: point it at a `.md` file and it validates
//! the path, applies a sensible built-in stylesheet, runs pandoc with the
//! right flags, and writes `output.pdf` beside the source. There is no
//! parsing, no document model, and no layout engine here — pandoc performs
//! all non-trivial work.
//!
//! ## Pipeline Overview
//!
//! ```text
//! document.md
//!  │
//!  ├─ 1. Validate   input must exist; .md/.markdown advisory check
//!  ├─ 2. Probe      `pandoc --version` — fail fast with an install hint
//!  ├─ 3. Stylesheet write built-in CSS to a scoped temp file
//!  ├─ 4. Invoke     pandoc <in> -o <dir>/output.pdf --css <tmp> --standalone
//!  └─ 5. Report     success line, or pandoc's stderr on failure
//! ```
//!
//! The temporary stylesheet is removed when the conversion returns,
//! whether pandoc succeeded, failed, or the thread panicked.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use md2pdf::{convert, ConvertConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConvertConfig::default();
//!     let report = convert("docs/readme.md", &config)?;
//!     println!("{} -> {}", report.input.display(), report.output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2pdf` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! md2pdf = { version = "0.3", default-features = false }
//! ```
//!
//! [pandoc]: https://pandoc.org

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod pandoc;
pub mod stylesheet;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConvertConfig, ConvertConfigBuilder};
pub use convert::{convert, output_path_for, ConversionReport, OUTPUT_FILE_NAME};
pub use error::Md2PdfError;
pub use pandoc::PandocVersion;
pub use stylesheet::{Stylesheet, DEFAULT_STYLESHEET};
