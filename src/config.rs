//! Configuration for a Markdown-to-PDF conversion.
//!
//! All behaviour is controlled through [`ConvertConfig`], built via its
//! [`ConvertConfigBuilder`]. The program has deliberately few knobs — the
//! output name and the stylesheet are fixed — but keeping the ones that exist
//! in a single struct makes them easy to share, log, and override in tests
//! (pointing `pandoc_program` at a fake binary is how the test suite
//! exercises probe failures without uninstalling pandoc).

use crate::error::Md2PdfError;

/// Configuration for a conversion.
///
/// Built via [`ConvertConfig::builder()`] or [`ConvertConfig::default()`].
///
/// # Example
/// ```rust
/// use md2pdf::ConvertConfig;
///
/// let config = ConvertConfig::builder()
///     .pandoc_program("/opt/pandoc/bin/pandoc")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    /// Name or path of the pandoc binary. Default: `"pandoc"`.
    ///
    /// A bare name is resolved through `PATH` by the OS; an absolute path
    /// bypasses `PATH` entirely, which is useful on systems with several
    /// pandoc installs or in tests that substitute a stub binary.
    pub pandoc_program: String,

    /// Pass `--standalone` so pandoc emits a complete document rather than a
    /// fragment. Default: `true`.
    ///
    /// Without it pandoc produces a body-only fragment, which most PDF
    /// engines reject outright. There is no CLI flag for this; it exists so
    /// library callers embedding fragments into their own template can opt
    /// out.
    pub standalone: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            pandoc_program: "pandoc".to_string(),
            standalone: true,
        }
    }
}

impl ConvertConfig {
    /// Create a new builder for `ConvertConfig`.
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConvertConfig`].
#[derive(Debug)]
pub struct ConvertConfigBuilder {
    config: ConvertConfig,
}

impl ConvertConfigBuilder {
    pub fn pandoc_program(mut self, program: impl Into<String>) -> Self {
        self.config.pandoc_program = program.into();
        self
    }

    pub fn standalone(mut self, v: bool) -> Self {
        self.config.standalone = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConvertConfig, Md2PdfError> {
        if self.config.pandoc_program.trim().is_empty() {
            return Err(Md2PdfError::InvalidConfig(
                "pandoc program name must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ConvertConfig::default();
        assert_eq!(c.pandoc_program, "pandoc");
        assert!(c.standalone);
    }

    #[test]
    fn builder_overrides() {
        let c = ConvertConfig::builder()
            .pandoc_program("/usr/local/bin/pandoc")
            .standalone(false)
            .build()
            .expect("valid config");
        assert_eq!(c.pandoc_program, "/usr/local/bin/pandoc");
        assert!(!c.standalone);
    }

    #[test]
    fn empty_program_is_rejected() {
        let err = ConvertConfig::builder()
            .pandoc_program("  ")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
