//! CLI binary for md2pdf.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConvertConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use md2pdf::{convert, ConvertConfig};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert a document; the PDF lands beside it as output.pdf
  md2pdf docs/readme.md

  # Use a specific pandoc install
  md2pdf --pandoc /opt/homebrew/bin/pandoc notes.md

  # Show pandoc's command line and timing
  md2pdf --verbose report.markdown

ENVIRONMENT VARIABLES:
  MD2PDF_PANDOC    Name or path of the pandoc binary (default: pandoc)

SETUP:
  md2pdf delegates all rendering to pandoc, which must be installed:
    macOS:          brew install pandoc
    Debian/Ubuntu:  apt install pandoc
    Fedora:         dnf install pandoc
  pandoc's default PDF engine is LaTeX-based; if PDF output fails, install
  a TeX distribution (e.g. tinytex, texlive) or see
  https://pandoc.org/installing.html
"#;

/// Convert a Markdown file to PDF via pandoc.
#[derive(Parser, Debug)]
#[command(
    name = "md2pdf",
    version,
    about = "Convert a Markdown file to PDF via pandoc",
    long_about = "Convert a single Markdown document to PDF by shelling out to pandoc. \
The result is written as output.pdf in the same directory as the input, styled \
with a built-in stylesheet.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the Markdown file to convert.
    markdown_file: std::path::PathBuf,

    /// Name or path of the pandoc binary.
    #[arg(long, env = "MD2PDF_PANDOC", default_value = "pandoc")]
    pandoc: String,

    /// Disable the progress spinner.
    #[arg(long, env = "MD2PDF_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2PDF_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MD2PDF_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Default to `warn` so the library's advisory messages (wrong file
    // extension) reach the user without --verbose.
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = ConvertConfig::builder()
        .pandoc_program(&cli.pandoc)
        .build()
        .context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    // The pandoc call blocks; the spinner's steady tick animates from a
    // background thread in the meantime.
    let spinner = if !cli.quiet && !cli.no_progress {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
        );
        bar.set_prefix("Converting");
        bar.set_message(cli.markdown_file.display().to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Some(bar)
    } else {
        None
    };

    let result = convert(&cli.markdown_file, &config);

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    let report = result.context("Conversion failed")?;

    if !cli.quiet {
        println!(
            "{} Converted {} to {}  {}",
            green("✔"),
            report.input.display(),
            bold(&report.output.display().to_string()),
            dim(&format!(
                "{}ms, pandoc {}",
                report.duration_ms, report.pandoc_version
            )),
        );
    }

    Ok(())
}
