//! End-to-end tests that open the written `.docx` package.

use crate::common::{fixture, fixture_path, paragraphs, read_part};
use mdword_babel::docx::Metadata;
use mdword_babel::{convert_str, publish, PublishSpec, RenderOptions, ScanOptions};
use std::fs;
use tempfile::tempdir;

const PARTS: &[&str] = &[
    "[Content_Types].xml",
    "_rels/.rels",
    "docProps/core.xml",
    "docProps/app.xml",
    "word/document.xml",
    "word/styles.xml",
    "word/numbering.xml",
    "word/_rels/document.xml.rels",
];

#[test]
fn every_part_is_well_formed_xml() {
    let doc = convert_str(
        &fixture("kitchensink.md"),
        ScanOptions::default(),
        &RenderOptions::default(),
    );
    let package = doc.to_bytes().expect("package");
    for part in PARTS {
        let xml = read_part(&package, part);
        roxmltree::Document::parse(&xml).unwrap_or_else(|e| panic!("{part} is malformed: {e}"));
    }
}

#[test]
fn kitchensink_paragraphs() {
    let dir = tempdir().unwrap();
    let destination = dir.path().join("kitchensink.docx");
    let result = publish(PublishSpec::new(fixture_path("kitchensink.md"), &destination))
        .expect("publish");
    assert_eq!(result.blocks, 22);

    let package = fs::read(&destination).unwrap();
    let paras = paragraphs(&read_part(&package, "word/document.xml"));
    assert_eq!(paras.len(), 22);

    assert_eq!(paras[0].style.as_deref(), Some("Heading1"));
    assert_eq!(paras[0].text, "Project Notes");

    assert_eq!(paras[1].text, "");
    assert_eq!(paras[1].style, None);

    assert_eq!(paras[2].text, "Intro with bold, strong, em, em and code.");

    assert_eq!(paras[5].style.as_deref(), Some("ListBullet"));
    assert_eq!(paras[7].style.as_deref(), Some("ListNumber"));
    assert_eq!(paras[8].text, "tenth step");

    assert_eq!(paras[10].text, "_".repeat(50));

    assert_eq!(paras[14].text, "A quoted *line*");
    assert_eq!(paras[14].indent.as_deref(), Some("720"));

    let code = &paras[17];
    assert_eq!(code.text, "def f(x):\n\n    return x * 2");
    assert_eq!(code.fonts, vec!["Courier New".to_string()]);

    assert_eq!(paras[19].style.as_deref(), Some("Heading5"));
}

#[test]
fn metadata_lands_in_core_properties() {
    let options = RenderOptions {
        metadata: Metadata {
            title: Some("Release <notes>".to_string()),
            author: Some("Docs Team".to_string()),
        },
        ..RenderOptions::default()
    };
    let package = convert_str("body", ScanOptions::default(), &options)
        .to_bytes()
        .unwrap();
    let core = read_part(&package, "docProps/core.xml");
    let xml = roxmltree::Document::parse(&core).unwrap();
    let title = xml
        .descendants()
        .find(|n| n.tag_name().name() == "title")
        .and_then(|n| n.text());
    assert_eq!(title, Some("Release <notes>"));
    assert!(core.contains("<dc:creator>Docs Team</dc:creator>"));
}

#[test]
fn code_block_font_follows_options() {
    let options = RenderOptions {
        code_font: "Fira Mono".to_string(),
        code_size_pt: 10.5,
        ..RenderOptions::default()
    };
    let package = convert_str("```\nx\n```", ScanOptions::default(), &options)
        .to_bytes()
        .unwrap();
    let document = read_part(&package, "word/document.xml");
    assert!(document.contains(r#"w:ascii="Fira Mono""#));
    assert!(document.contains(r#"<w:sz w:val="21"/>"#));
}

#[test]
fn unwritable_destination_is_reported() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("in.md");
    fs::write(&source, "text").unwrap();
    let destination = dir.path().join("no").join("such").join("dir.docx");
    let err = publish(PublishSpec::new(&source, &destination)).unwrap_err();
    assert!(err.to_string().contains("dir.docx"));
}
