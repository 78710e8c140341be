//! Fixture-driven scanner tests.

use crate::common::{fixture, outline};
use insta::assert_snapshot;
use mdword_babel::{scan, Block, FencePolicy, ScanOptions};

#[test]
fn kitchensink_outline() {
    let blocks = scan(&fixture("kitchensink.md"), ScanOptions::default());
    assert_snapshot!(outline(&blocks), @r"
    heading1: Project Notes
    blank
    paragraph: Intro with bold, strong, em, em and code.
    blank
    heading2: Lists
    bullet: first bullet
    bullet: second bullet with **markup**
    numbered: first step
    numbered: tenth step
    blank
    rule
    rule
    paragraph: ----
    blank
    quote: A quoted *line*
    quote: > nested marker
    blank
    code: def f(x):\n\n    return x * 2
    blank
    heading5: Deep heading
    paragraph: Trailing paragraph with a lone * star
    blank
    ");
}

#[test]
fn collapsing_example() {
    let blocks = scan("a\n\n\nb", ScanOptions::default());
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph("a".to_string()),
            Block::BlankSpacer,
            Block::Paragraph("b".to_string()),
        ]
    );
}

#[test]
fn fence_state_outranks_every_other_rule() {
    let source = "```\n# not a heading\n- not a bullet\n\n\n> not a quote\n---\n```";
    let blocks = scan(source, ScanOptions::default());
    assert_eq!(
        blocks,
        vec![Block::CodeBlock(
            "# not a heading\n- not a bullet\n\n\n> not a quote\n---".to_string()
        )]
    );
}

#[test]
fn indented_fence_markers_toggle() {
    let blocks = scan("  ```\n  x\n  ```", ScanOptions::default());
    assert_eq!(blocks, vec![Block::CodeBlock("  x".to_string())]);
}

#[test]
fn unterminated_fence_policies() {
    let source = "para\n```\none\ntwo";
    assert_snapshot!(outline(&scan(source, ScanOptions::default())), @"paragraph: para");

    let flush = ScanOptions {
        unterminated_fence: FencePolicy::Flush,
    };
    assert_snapshot!(outline(&scan(source, flush)), @r"
    paragraph: para
    code: one\ntwo
    ");
}

#[test]
fn malformed_markdown_degrades_to_paragraphs() {
    let blocks = scan("| a | b |\n[ref]: http://x\n<div>html</div>", ScanOptions::default());
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph("| a | b |".to_string()),
            Block::Paragraph("[ref]: http://x".to_string()),
            Block::Paragraph("<div>html</div>".to_string()),
        ]
    );
}
