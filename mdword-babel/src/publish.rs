//! File-to-file conversion pipeline.
//!
//! Reads a Markdown file, scans it into blocks, renders the blocks onto a
//! document and writes the `.docx` package. The whole input is read before
//! scanning starts and the whole package is built in memory before the single
//! final write.
//!
//! For in-memory use, call [`crate::scan`] and [`crate::render`] directly.

use crate::error::ConvertError;
use crate::render::{render, RenderOptions};
use crate::scanner::{scan, ScanOptions};
use std::fs;
use std::path::{Path, PathBuf};

/// Specifies one conversion.
///
/// ```ignore
/// let spec = PublishSpec::new("notes.md", "notes.docx")
///     .with_render_options(RenderOptions::default());
/// ```
#[derive(Debug, Clone)]
pub struct PublishSpec {
    /// Markdown source path.
    pub source: PathBuf,
    /// Destination `.docx` path.
    pub destination: PathBuf,
    pub scan: ScanOptions,
    pub render: RenderOptions,
}

impl PublishSpec {
    pub fn new(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            destination: destination.as_ref().to_path_buf(),
            scan: ScanOptions::default(),
            render: RenderOptions::default(),
        }
    }

    pub fn with_scan_options(mut self, options: ScanOptions) -> Self {
        self.scan = options;
        self
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Number of blocks written to the document.
    pub blocks: usize,
}

impl PublishResult {
    /// One-line confirmation naming both paths.
    pub fn confirmation_message(&self) -> String {
        format!(
            "Converted {} to {}",
            self.source.display(),
            self.destination.display()
        )
    }
}

/// Converts `spec.source` into a `.docx` at `spec.destination`.
///
/// # Errors
///
/// Returns [`ConvertError::FileAccess`] if the source cannot be read as UTF-8
/// text or the destination cannot be written.
pub fn publish(spec: PublishSpec) -> Result<PublishResult, ConvertError> {
    let source = fs::read_to_string(&spec.source)
        .map_err(|err| ConvertError::file_access(&spec.source, &err))?;
    log::info!(
        "read {} byte(s) from {}",
        source.len(),
        spec.source.display()
    );

    let blocks = scan(&source, spec.scan);
    let doc = render(&blocks, &spec.render);
    doc.save(&spec.destination)?;
    log::info!(
        "wrote {} paragraph(s) to {}",
        doc.paragraphs().len(),
        spec.destination.display()
    );

    Ok(PublishResult {
        source: spec.source,
        destination: spec.destination,
        blocks: blocks.len(),
    })
}
