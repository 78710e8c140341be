//! Line classification and block emission.
//!
//! The scanner walks the input once, top to bottom, with one line of lookback.
//! Every line is classified by the first matching rule:
//!
//! | Rule      | Test                                        | Emits                  |
//! |-----------|---------------------------------------------|------------------------|
//! | fence     | trimmed line starts with three backticks    | toggles code mode      |
//! | code      | inside a fence                              | buffered verbatim      |
//! | heading   | raw line starts with `#`                    | `Heading` (level ≤ 5)  |
//! | bullet    | trimmed line starts with `- ` or `* `       | `BulletItem`           |
//! | numbered  | trimmed line matches `^\d+\.\s`             | `NumberedItem`         |
//! | rule      | trimmed line is exactly `---` or `***`      | `Rule`                 |
//! | quote     | trimmed line starts with `>`                | `Quote`                |
//! | blank     | trimmed line is empty                       | one `BlankSpacer`      |
//! | paragraph | anything else                               | `Paragraph`            |
//!
//! Only paragraphs go through inline stripping. Headings, list items and quotes
//! keep their markup characters.
//!
//! A run of blank lines produces at most one spacer, and none at the start of
//! the input. "Previous line" always means the previous raw input line, even
//! when that line was a fence marker or code content.

use crate::blocks::{Block, HeadingLevel};
use crate::inline::strip_inline_markup;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s").expect("valid numbered list regex"));

const FENCE_MARKER: &str = "```";

/// What to do with code lines still buffered when the input ends inside a fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FencePolicy {
    /// Drop the buffered lines.
    #[default]
    Discard,
    /// Emit the buffered lines as a final code block.
    Flush,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    pub unterminated_fence: FencePolicy,
}

/// Classification of a single line outside a code fence.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    Heading { level: HeadingLevel, text: String },
    Bullet(String),
    Numbered(String),
    Rule,
    Quote(String),
    Blank,
    /// Paragraph text after inline stripping. May be blank.
    Paragraph(String),
}

pub fn is_fence_marker(line: &str) -> bool {
    line.trim().starts_with(FENCE_MARKER)
}

/// Classify a line that is neither a fence marker nor code content.
pub fn classify_line(line: &str) -> LineClass {
    if line.starts_with('#') {
        let rest = line.trim_start_matches('#');
        let count = line.len() - rest.len();
        return LineClass::Heading {
            level: HeadingLevel::from_marker_count(count),
            text: rest.trim().to_string(),
        };
    }

    let trimmed = line.trim();

    if let Some(text) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return LineClass::Bullet(text.to_string());
    }

    if let Some(prefix) = NUMBERED_PREFIX.find(trimmed) {
        return LineClass::Numbered(trimmed[prefix.end()..].to_string());
    }

    if trimmed == "---" || trimmed == "***" {
        return LineClass::Rule;
    }

    if let Some(quoted) = trimmed.strip_prefix('>') {
        return LineClass::Quote(quoted.trim().to_string());
    }

    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    LineClass::Paragraph(strip_inline_markup(line))
}

/// Scan state carried across lines.
#[derive(Debug)]
pub struct Scanner {
    options: ScanOptions,
    inside_code_block: bool,
    previous_blank: bool,
    code_buffer: Vec<String>,
    blocks: Vec<Block>,
    lines_seen: usize,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Scanner {
            options,
            inside_code_block: false,
            // No spacer before the first line.
            previous_blank: true,
            code_buffer: Vec::new(),
            blocks: Vec::new(),
            lines_seen: 0,
        }
    }

    pub fn inside_code_block(&self) -> bool {
        self.inside_code_block
    }

    /// Blocks emitted so far.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn push_line(&mut self, line: &str) {
        let blank = line.trim().is_empty();
        self.lines_seen += 1;

        if is_fence_marker(line) {
            if self.inside_code_block {
                self.flush_code_block();
            }
            self.inside_code_block = !self.inside_code_block;
        } else if self.inside_code_block {
            self.code_buffer.push(line.to_string());
        } else {
            self.emit(classify_line(line));
        }

        self.previous_blank = blank;
    }

    fn emit(&mut self, class: LineClass) {
        let block = match class {
            LineClass::Heading { level, text } => Block::Heading { level, text },
            LineClass::Bullet(text) => Block::BulletItem(text),
            LineClass::Numbered(text) => Block::NumberedItem(text),
            LineClass::Rule => Block::Rule,
            LineClass::Quote(text) => Block::Quote(text),
            LineClass::Blank => {
                if self.previous_blank {
                    return;
                }
                Block::BlankSpacer
            }
            LineClass::Paragraph(text) => {
                if text.trim().is_empty() {
                    return;
                }
                Block::Paragraph(text)
            }
        };
        self.blocks.push(block);
    }

    fn flush_code_block(&mut self) {
        let text = self.code_buffer.join("\n");
        self.code_buffer.clear();
        self.blocks.push(Block::CodeBlock(text));
    }

    /// End the scan and hand back the blocks.
    pub fn finish(mut self) -> Vec<Block> {
        if self.inside_code_block {
            match self.options.unterminated_fence {
                FencePolicy::Flush => {
                    log::info!(
                        "flushing {} line(s) of an unterminated code fence",
                        self.code_buffer.len()
                    );
                    self.flush_code_block();
                }
                FencePolicy::Discard => {
                    log::warn!(
                        "discarding {} line(s) of an unterminated code fence",
                        self.code_buffer.len()
                    );
                }
            }
        }
        log::debug!(
            "scanned {} line(s) into {} block(s)",
            self.lines_seen,
            self.blocks.len()
        );
        self.blocks
    }
}

/// Scan a whole Markdown source into blocks.
///
/// Line endings are normalized first (`\r\n` and lone `\r` become `\n`), then
/// the text is split on every `\n`. A trailing newline therefore yields one
/// final empty line.
pub fn scan(source: &str, options: ScanOptions) -> Vec<Block> {
    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");
    let mut scanner = Scanner::new(options);
    for line in normalized.split('\n') {
        scanner.push_line(line);
    }
    scanner.finish()
}
