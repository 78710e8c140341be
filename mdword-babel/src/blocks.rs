//! Output blocks produced by the line scanner.
//!
//! Blocks are flat: the scanner emits them in input order and nothing mutates
//! them afterwards. The renderer consumes them one by one.

/// Heading level, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MAX: u8 = 5;

    /// Level for a run of `count` leading `#` characters. Six or more clamp to 5.
    pub fn from_marker_count(count: usize) -> Self {
        HeadingLevel(count.clamp(1, Self::MAX as usize) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Named list style a list item is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Numbered,
}

/// A single unit of output content.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    BulletItem(String),
    NumberedItem(String),
    Rule,
    Quote(String),
    /// Fenced code, lines joined with `'\n'`.
    CodeBlock(String),
    Paragraph(String),
    BlankSpacer,
}

impl Block {
    pub fn heading(level: usize, text: impl Into<String>) -> Self {
        Block::Heading {
            level: HeadingLevel::from_marker_count(level),
            text: text.into(),
        }
    }

    /// Short lowercase name of the block variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::BulletItem(_) => "bullet",
            Block::NumberedItem(_) => "numbered",
            Block::Rule => "rule",
            Block::Quote(_) => "quote",
            Block::CodeBlock(_) => "code",
            Block::Paragraph(_) => "paragraph",
            Block::BlankSpacer => "blank",
        }
    }

    /// Text carried by the block, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading { text, .. }
            | Block::BulletItem(text)
            | Block::NumberedItem(text)
            | Block::Quote(text)
            | Block::CodeBlock(text)
            | Block::Paragraph(text) => Some(text),
            Block::Rule | Block::BlankSpacer => None,
        }
    }

    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Block::BulletItem(_) => Some(ListKind::Bullet),
            Block::NumberedItem(_) => Some(ListKind::Numbered),
            _ => None,
        }
    }
}
