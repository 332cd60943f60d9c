//! The top-level conversion entry point.
//!
//! Control flow is strictly linear: validate → probe → derive output path →
//! materialize stylesheet → invoke pandoc → report. Nothing is retried and
//! nothing loops back; every failure propagates to the caller as a
//! [`Md2PdfError`].

use crate::config::ConvertConfig;
use crate::error::Md2PdfError;
use crate::pandoc::{self, PandocVersion};
use crate::stylesheet::Stylesheet;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Fixed name of the produced file, written beside the input.
pub const OUTPUT_FILE_NAME: &str = "output.pdf";

/// What a successful conversion produced.
///
/// Returned so callers (the CLI in particular) can print a line naming both
/// the source and the destination.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// The Markdown file that was converted.
    pub input: PathBuf,
    /// Where the PDF was written.
    pub output: PathBuf,
    /// Version reported by the capability probe.
    pub pandoc_version: PandocVersion,
    /// Wall-clock time for the whole operation, pandoc included.
    pub duration_ms: u64,
}

/// Compute where the PDF will be written: the input's directory joined with
/// [`OUTPUT_FILE_NAME`].
///
/// A bare filename ("readme.md") resolves to `output.pdf` in the current
/// directory. A pre-existing file at the derived path is overwritten without
/// warning — the name is fixed, so repeated runs against inputs in the same
/// directory clobber each other's output.
pub fn output_path_for(input: &Path) -> PathBuf {
    match input.parent() {
        Some(dir) => dir.join(OUTPUT_FILE_NAME),
        None => PathBuf::from(OUTPUT_FILE_NAME),
    }
}

/// Whether the path carries a conventional Markdown extension.
///
/// Advisory only — [`convert`] warns on a mismatch but proceeds, since
/// pandoc happily reads Markdown from any filename.
pub fn is_markdown_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            let e = e.to_ascii_lowercase();
            e == "md" || e == "markdown"
        })
}

/// Convert a Markdown file to `output.pdf` in the same directory.
///
/// # Errors
/// - [`Md2PdfError::InputNotFound`] — the path is not an existing regular
///   file; returned before pandoc is probed or any file is written.
/// - [`Md2PdfError::PandocMissing`] — pandoc cannot be invoked; returned
///   before any file is written.
/// - [`Md2PdfError::Stylesheet`] — the temporary stylesheet could not be
///   created.
/// - [`Md2PdfError::ConversionFailed`] — pandoc exited nonzero; its stderr
///   is carried in the error.
///
/// The temporary stylesheet is removed on every path out of this function,
/// including the error paths.
pub fn convert(input: impl AsRef<Path>, config: &ConvertConfig) -> Result<ConversionReport, Md2PdfError> {
    let total_start = Instant::now();
    let input = input.as_ref();
    info!("Starting conversion: {}", input.display());

    // ── Step 1: Validate the input ───────────────────────────────────────
    if !input.is_file() {
        return Err(Md2PdfError::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    if !is_markdown_extension(input) {
        warn!(
            "'{}' does not look like a Markdown file (.md/.markdown); attempting conversion anyway",
            input.display()
        );
    }

    // ── Step 2: Probe pandoc ─────────────────────────────────────────────
    // Fails fast with an install hint, before any filesystem write.
    let pandoc_version = pandoc::probe(config)?;

    // ── Step 3: Derive the output path ───────────────────────────────────
    let output = output_path_for(input);

    // ── Step 4: Materialize the stylesheet ───────────────────────────────
    // `sheet` lives until this function returns; drop deletes the file on
    // success and failure alike.
    let sheet = Stylesheet::materialize()?;

    // ── Step 5: Invoke pandoc and wait ───────────────────────────────────
    pandoc::run(config, input, &output, sheet.path())?;

    let duration_ms = total_start.elapsed().as_millis() as u64;
    info!(
        "Converted {} to {} in {}ms",
        input.display(),
        output.display(),
        duration_ms
    );

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output,
        pandoc_version,
        duration_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn output_path_is_beside_input() {
        assert_eq!(
            output_path_for(Path::new("docs/readme.md")),
            PathBuf::from("docs/output.pdf")
        );
        assert_eq!(
            output_path_for(Path::new("/tmp/notes/plan.markdown")),
            PathBuf::from("/tmp/notes/output.pdf")
        );
    }

    #[test]
    fn output_path_for_bare_filename() {
        assert_eq!(
            output_path_for(Path::new("readme.md")),
            PathBuf::from("output.pdf")
        );
    }

    #[test]
    fn markdown_extension_check() {
        assert!(is_markdown_extension(Path::new("a.md")));
        assert!(is_markdown_extension(Path::new("a.markdown")));
        assert!(is_markdown_extension(Path::new("a.MD")));
        assert!(!is_markdown_extension(Path::new("a.txt")));
        assert!(!is_markdown_extension(Path::new("a")));
        assert!(!is_markdown_extension(Path::new("a.md.bak")));
    }

    fn unprobeable_config() -> ConvertConfig {
        ConvertConfig::builder()
            .pandoc_program("definitely-not-a-real-pandoc-binary")
            .build()
            .unwrap()
    }

    #[test]
    fn missing_input_fails_before_probe() {
        // The config's pandoc doesn't exist either; getting InputNotFound
        // (not PandocMissing) proves validation runs first.
        let err = convert("definitely/missing.md", &unprobeable_config()).unwrap_err();
        assert!(matches!(err, Md2PdfError::InputNotFound { .. }), "got: {err}");
    }

    #[test]
    fn wrong_extension_is_advisory() {
        // An existing .txt file gets past validation; with an unprobeable
        // pandoc the next failure must be the probe, not the extension.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "# hello").unwrap();

        let err = convert(&path, &unprobeable_config()).unwrap_err();
        assert!(matches!(err, Md2PdfError::PandocMissing { .. }), "got: {err}");
    }

    #[test]
    fn missing_tool_leaves_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, "# hello\n").unwrap();

        let _ = convert(&path, &unprobeable_config()).unwrap_err();
        assert!(!dir.path().join(OUTPUT_FILE_NAME).exists());
    }
}
