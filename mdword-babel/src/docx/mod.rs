//! In-memory WordprocessingML document and its `.docx` packaging.
//!
//! [`DocumentBuilder`] is append-only: paragraphs are added in order and only
//! the most recently added paragraph can be adjusted afterwards (indentation,
//! run fonts). Persisting writes an Office Open XML zip package with the parts
//! Word needs to open the file, plus the named styles referenced by headings
//! and list items.

mod package;
mod parts;
mod xml;

use crate::blocks::{HeadingLevel, ListKind};
use crate::error::ConvertError;
use std::fs;
use std::io;
use std::path::Path;

/// Twentieths of a point, the unit WordprocessingML uses for indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Twips(pub u32);

impl Twips {
    pub const PER_INCH: f64 = 1440.0;

    pub fn from_inches(inches: f64) -> Self {
        Twips((inches.max(0.0) * Self::PER_INCH).round() as u32)
    }
}

/// 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Parse `RRGGBB`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Per-run font overrides. `None` fields inherit from the paragraph style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunFont {
    pub family: Option<String>,
    pub size_pt: Option<f32>,
    pub color: Option<Rgb>,
}

impl RunFont {
    pub fn is_default(&self) -> bool {
        self.family.is_none() && self.size_pt.is_none() && self.color.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub font: RunFont,
}

/// Named paragraph styles defined in `styles.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Heading(HeadingLevel),
    ListBullet,
    ListNumber,
}

impl ParagraphStyle {
    pub fn style_id(self) -> String {
        match self {
            ParagraphStyle::Heading(level) => format!("Heading{}", level.get()),
            ParagraphStyle::ListBullet => "ListBullet".to_string(),
            ParagraphStyle::ListNumber => "ListNumber".to_string(),
        }
    }
}

impl From<ListKind> for ParagraphStyle {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Bullet => ParagraphStyle::ListBullet,
            ListKind::Numbered => ParagraphStyle::ListNumber,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    style: Option<ParagraphStyle>,
    left_indent: Option<Twips>,
    runs: Vec<Run>,
}

impl Paragraph {
    fn new(text: &str, style: Option<ParagraphStyle>) -> Self {
        // Empty text produces a paragraph without runs.
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run {
                text: text.to_string(),
                font: RunFont::default(),
            }]
        };
        Paragraph {
            style,
            left_indent: None,
            runs,
        }
    }

    pub fn style(&self) -> Option<ParagraphStyle> {
        self.style
    }

    pub fn left_indent(&self) -> Option<Twips> {
        self.left_indent
    }

    pub fn set_left_indent(&mut self, indent: Twips) -> &mut Self {
        self.left_indent = Some(indent);
        self
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut Run> {
        self.runs.iter_mut()
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Document core properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    paragraphs: Vec<Paragraph>,
    metadata: Metadata,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    fn push(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        self.paragraphs.push(paragraph);
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    pub fn add_heading(&mut self, text: &str, level: HeadingLevel) -> &mut Paragraph {
        self.push(Paragraph::new(text, Some(ParagraphStyle::Heading(level))))
    }

    pub fn add_paragraph(&mut self, text: &str) -> &mut Paragraph {
        self.push(Paragraph::new(text, None))
    }

    pub fn add_list_item(&mut self, text: &str, kind: ListKind) -> &mut Paragraph {
        self.push(Paragraph::new(text, Some(kind.into())))
    }

    /// Indent the most recently added paragraph. Does nothing on an empty document.
    pub fn set_left_indent(&mut self, indent: Twips) {
        if let Some(paragraph) = self.paragraphs.last_mut() {
            paragraph.set_left_indent(indent);
        }
    }

    /// Body of `word/document.xml`.
    pub fn document_xml(&self) -> String {
        xml::document_xml(&self.paragraphs)
    }

    /// Serialize the complete `.docx` package.
    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        package::write_package(self)
    }

    /// Write the package to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConvertError> {
        let path = path.as_ref();
        let bytes = self
            .to_bytes()
            .map_err(|err| ConvertError::file_access(path, &err))?;
        fs::write(path, bytes).map_err(|err| ConvertError::file_access(path, &err))
    }
}
