//! pandoc subprocess plumbing: availability probe and the real invocation.
//!
//! pandoc is treated as an opaque collaborator with an exit-status contract:
//! 0 means the PDF was written, anything else means failure with diagnostics
//! on stderr. Nothing here parses Markdown or PDF — all rendering is
//! delegated to the tool.
//!
//! ## Why probe first?
//!
//! A missing pandoc surfaces from `Command::output` as a bare
//! "No such file or directory", which tells the user nothing about how to
//! fix it. Probing with `pandoc --version` before the real invocation turns
//! that into an install hint, and does so before any temp file or output
//! file is touched.

use crate::config::ConvertConfig;
use crate::error::Md2PdfError;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Result of a successful capability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PandocVersion(pub String);

impl std::fmt::Display for PandocVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check that pandoc can be invoked at all, via `pandoc --version`.
///
/// Pure function of `config`; holds no global state and touches no files.
pub fn probe(config: &ConvertConfig) -> Result<PandocVersion, Md2PdfError> {
    let output = Command::new(&config.pandoc_program)
        .arg("--version")
        .output()
        .map_err(|e| Md2PdfError::PandocMissing {
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Md2PdfError::PandocMissing {
            detail: format!(
                "`{} --version` exited with {}",
                config.pandoc_program, output.status
            ),
        });
    }

    let version = parse_version(&String::from_utf8_lossy(&output.stdout));
    debug!("Probed {} — version {}", config.pandoc_program, version);
    Ok(version)
}

/// Extract "X.Y.Z" from the `pandoc X.Y.Z` banner line.
///
/// Falls back to the whole first line (or "unknown") on anything
/// unexpected — the version is informational, never load-bearing.
fn parse_version(stdout: &str) -> PandocVersion {
    let first_line = stdout.lines().next().unwrap_or("").trim();
    let version = first_line
        .strip_prefix("pandoc ")
        .unwrap_or(first_line)
        .to_string();
    if version.is_empty() {
        PandocVersion("unknown".to_string())
    } else {
        PandocVersion(version)
    }
}

/// Run the real conversion: `pandoc <input> -o <output> --css <sheet> --standalone`.
///
/// Blocks until pandoc exits. A nonzero exit surfaces pandoc's stderr
/// verbatim in [`Md2PdfError::ConversionFailed`].
pub fn run(
    config: &ConvertConfig,
    input: &Path,
    output: &Path,
    stylesheet: &Path,
) -> Result<(), Md2PdfError> {
    let mut cmd = Command::new(&config.pandoc_program);
    cmd.arg(input)
        .arg("-o")
        .arg(output)
        .arg("--css")
        .arg(stylesheet);
    if config.standalone {
        cmd.arg("--standalone");
    }

    debug!("Running {:?}", cmd);

    let result = cmd.output().map_err(|e| Md2PdfError::Spawn { source: e })?;

    if !result.status.success() {
        return Err(Md2PdfError::ConversionFailed {
            status: result.status.code(),
            stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
        });
    }

    Ok(())
}
