//! Block to document mapping.
//!
//! | Block          | Document element                                   |
//! |----------------|----------------------------------------------------|
//! | `Heading`      | paragraph in style `Heading N`                     |
//! | `BulletItem`   | paragraph in style `List Bullet`                   |
//! | `NumberedItem` | paragraph in style `List Number`                   |
//! | `Rule`         | paragraph of `rule_width` × `rule_char`            |
//! | `Quote`        | paragraph with a left indent                       |
//! | `CodeBlock`    | paragraph whose runs use the code font             |
//! | `Paragraph`    | plain paragraph                                    |
//! | `BlankSpacer`  | empty paragraph                                    |

use crate::blocks::{Block, ListKind};
use crate::docx::{DocumentBuilder, Metadata, Rgb, RunFont, Twips};

/// Visual knobs used when mapping blocks onto the document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub code_font: String,
    pub code_size_pt: f32,
    pub code_color: Rgb,
    pub rule_char: char,
    pub rule_width: usize,
    pub quote_indent_inches: f64,
    pub metadata: Metadata,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            code_font: "Courier New".to_string(),
            code_size_pt: 9.0,
            code_color: Rgb::BLACK,
            rule_char: '_',
            rule_width: 50,
            quote_indent_inches: 0.5,
            metadata: Metadata::default(),
        }
    }
}

impl RenderOptions {
    fn code_run_font(&self) -> RunFont {
        RunFont {
            family: Some(self.code_font.clone()),
            size_pt: Some(self.code_size_pt),
            color: Some(self.code_color),
        }
    }

    pub fn rule_text(&self) -> String {
        std::iter::repeat(self.rule_char)
            .take(self.rule_width)
            .collect()
    }
}

/// Append `blocks` to a fresh document.
pub fn render(blocks: &[Block], options: &RenderOptions) -> DocumentBuilder {
    let mut doc = DocumentBuilder::new().with_metadata(options.metadata.clone());
    for block in blocks {
        render_block(&mut doc, block, options);
    }
    doc
}

pub fn render_block(doc: &mut DocumentBuilder, block: &Block, options: &RenderOptions) {
    match block {
        Block::Heading { level, text } => {
            doc.add_heading(text, *level);
        }
        Block::BulletItem(text) => {
            doc.add_list_item(text, ListKind::Bullet);
        }
        Block::NumberedItem(text) => {
            doc.add_list_item(text, ListKind::Numbered);
        }
        Block::Rule => {
            doc.add_paragraph(&options.rule_text());
        }
        Block::Quote(text) => {
            doc.add_paragraph(text);
            doc.set_left_indent(Twips::from_inches(options.quote_indent_inches));
        }
        Block::CodeBlock(text) => {
            let font = options.code_run_font();
            for run in doc.add_paragraph(text).runs_mut() {
                run.font = font.clone();
            }
        }
        Block::Paragraph(text) => {
            doc.add_paragraph(text);
        }
        Block::BlankSpacer => {
            doc.add_paragraph("");
        }
    }
}
