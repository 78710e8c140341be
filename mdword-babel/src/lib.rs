//! Markdown to Word conversion
//!
//!     This crate turns a Markdown file into a `.docx` document. It is a pure lib, that is it
//!     powers mdword-cli but makes no assumptions about a shell: nothing here prints, reads env
//!     vars or exits the process.
//!
//! Architecture
//!
//!     The conversion is a single forward pass:
//!
//!     source text → lines → scanner (classify, one line of lookback) → blocks → render → docx
//!
//!     .
//!     ├── error.rs        # ConvertError
//!     ├── blocks.rs       # Output block model
//!     ├── inline.rs       # Emphasis / code-span stripping
//!     ├── scanner.rs      # Line classifier and scan state
//!     ├── render.rs       # Blocks → document builder calls
//!     ├── docx            # Document model and .docx packaging
//!     └── publish.rs      # File in, file out
//!
//! Scope
//!
//!     This is not a CommonMark implementation. Tables, nested lists, reference links and raw
//!     HTML are treated as paragraphs. Inline emphasis is stripped, not styled. Anything the
//!     scanner does not recognize degrades to a paragraph; content never causes an error.
//!
//!     The conversion is one way. There is no docx → markdown path.

pub mod blocks;
pub mod docx;
pub mod error;
pub mod inline;
pub mod publish;
pub mod render;
pub mod scanner;

pub use blocks::{Block, HeadingLevel, ListKind};
pub use docx::DocumentBuilder;
pub use error::ConvertError;
pub use publish::{publish, PublishResult, PublishSpec};
pub use render::{render, RenderOptions};
pub use scanner::{scan, FencePolicy, ScanOptions};

/// Scans and renders `source` in memory.
pub fn convert_str(
    source: &str,
    scan_options: ScanOptions,
    render_options: &RenderOptions,
) -> DocumentBuilder {
    render(&scan(source, scan_options), render_options)
}
