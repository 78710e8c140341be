//! Shared helpers for the integration tests.

use mdword_babel::Block;
use std::io::{Cursor, Read};
use std::path::PathBuf;

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// One line per block, code newlines shown as `\n`.
pub fn outline(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            Block::Heading { level, text } => format!("heading{}: {text}", level.get()),
            Block::Rule | Block::BlankSpacer => block.kind_name().to_string(),
            other => format!(
                "{}: {}",
                other.kind_name(),
                other.text().unwrap_or_default().replace('\n', "\\n")
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read a named part out of a `.docx` package.
pub fn read_part(package: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(package)).expect("valid zip");
    let mut file = archive
        .by_name(name)
        .unwrap_or_else(|e| panic!("missing part {name}: {e}"));
    let mut contents = String::new();
    file.read_to_string(&mut contents).expect("utf-8 part");
    contents
}

/// A paragraph as seen in `word/document.xml`.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlParagraph {
    pub style: Option<String>,
    pub indent: Option<String>,
    pub fonts: Vec<String>,
    pub text: String,
}

pub fn paragraphs(document_xml: &str) -> Vec<XmlParagraph> {
    let doc = roxmltree::Document::parse(document_xml).expect("well-formed document.xml");
    doc.descendants()
        .filter(|n| n.has_tag_name((W_NS, "p")))
        .map(|p| {
            let attr_of = |tag: &str| {
                p.descendants()
                    .find(|n| n.has_tag_name((W_NS, tag)))
                    .and_then(|n| n.attribute((W_NS, "val")).or(n.attribute((W_NS, "left"))))
                    .map(str::to_string)
            };
            let fonts = p
                .descendants()
                .filter(|n| n.has_tag_name((W_NS, "rFonts")))
                .filter_map(|n| n.attribute((W_NS, "ascii")).map(str::to_string))
                .collect();
            let mut text = String::new();
            for node in p.descendants() {
                if node.has_tag_name((W_NS, "t")) {
                    text.push_str(node.text().unwrap_or_default());
                } else if node.has_tag_name((W_NS, "br")) {
                    text.push('\n');
                } else if node.has_tag_name((W_NS, "tab")) {
                    text.push('\t');
                }
            }
            XmlParagraph {
                style: attr_of("pStyle"),
                indent: attr_of("ind"),
                fonts,
                text,
            }
        })
        .collect()
}
