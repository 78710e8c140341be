//! Shared configuration loader for mdword.
//!
//! `defaults/mdword.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdwordConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdword_babel::docx::{Metadata, Rgb};
use mdword_babel::{FencePolicy, RenderOptions, ScanOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdword.default.toml");

/// Top-level configuration consumed by mdword applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdwordConfig {
    pub convert: ConvertConfig,
    pub style: StyleConfig,
    #[serde(default)]
    pub document: DocumentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub unterminated_fence: FencePolicyConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FencePolicyConfig {
    Discard,
    Flush,
}

impl From<FencePolicyConfig> for FencePolicy {
    fn from(config: FencePolicyConfig) -> Self {
        match config {
            FencePolicyConfig::Discard => FencePolicy::Discard,
            FencePolicyConfig::Flush => FencePolicy::Flush,
        }
    }
}

/// Visual settings for the rendered document.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    pub code: CodeStyleConfig,
    pub rule: RuleStyleConfig,
    pub quote: QuoteStyleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeStyleConfig {
    pub font: String,
    pub size_pt: f32,
    /// `RRGGBB` hex.
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuleStyleConfig {
    pub character: char,
    pub width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteStyleConfig {
    pub indent_inches: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentConfig {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl MdwordConfig {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            unterminated_fence: self.convert.unterminated_fence.into(),
        }
    }

    /// Render options; fails on a malformed code colour.
    pub fn render_options(&self) -> Result<RenderOptions, ConfigError> {
        let code = &self.style.code;
        let code_color = Rgb::from_hex(&code.color).ok_or_else(|| {
            ConfigError::Message(format!(
                "style.code.color must be a RRGGBB hex value, got '{}'",
                code.color
            ))
        })?;
        Ok(RenderOptions {
            code_font: code.font.clone(),
            code_size_pt: code.size_pt,
            code_color,
            rule_char: self.style.rule.character,
            rule_width: self.style.rule.width,
            quote_indent_inches: self.style.quote.indent_inches,
            metadata: Metadata {
                title: self.document.title.clone(),
                author: self.document.author.clone(),
            },
        })
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdwordConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdwordConfig, ConfigError> {
    Loader::new().build()
}
