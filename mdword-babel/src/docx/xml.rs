//! `word/document.xml` serialization.

use super::{Paragraph, Run, RunFont};
use html_escape::{encode_double_quoted_attribute, encode_text};

const DOCUMENT_OPEN: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;

// US Letter with one-inch margins.
const SECTION_PROPERTIES: &str = r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/><w:cols w:space="720"/><w:docGrid w:linePitch="360"/></w:sectPr>"#;

const DOCUMENT_CLOSE: &str = "</w:body></w:document>";

pub(super) fn document_xml(paragraphs: &[Paragraph]) -> String {
    let mut out = String::from(DOCUMENT_OPEN);
    for paragraph in paragraphs {
        write_paragraph(&mut out, paragraph);
    }
    out.push_str(SECTION_PROPERTIES);
    out.push_str(DOCUMENT_CLOSE);
    out
}

fn write_paragraph(out: &mut String, paragraph: &Paragraph) {
    out.push_str("<w:p>");
    if paragraph.style.is_some() || paragraph.left_indent.is_some() {
        out.push_str("<w:pPr>");
        if let Some(style) = paragraph.style {
            out.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, style.style_id()));
        }
        if let Some(indent) = paragraph.left_indent {
            out.push_str(&format!(r#"<w:ind w:left="{}"/>"#, indent.0));
        }
        out.push_str("</w:pPr>");
    }
    for run in &paragraph.runs {
        write_run(out, run);
    }
    out.push_str("</w:p>");
}

fn write_run(out: &mut String, run: &Run) {
    out.push_str("<w:r>");
    if !run.font.is_default() {
        write_run_properties(out, &run.font);
    }
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<w:br/>");
        }
        for (j, segment) in line.split('\t').enumerate() {
            if j > 0 {
                out.push_str("<w:tab/>");
            }
            if !segment.is_empty() {
                out.push_str(r#"<w:t xml:space="preserve">"#);
                out.push_str(&encode_text(&xml_safe(segment)));
                out.push_str("</w:t>");
            }
        }
    }
    out.push_str("</w:r>");
}

fn write_run_properties(out: &mut String, font: &RunFont) {
    out.push_str("<w:rPr>");
    if let Some(family) = &font.family {
        let family = encode_double_quoted_attribute(family);
        out.push_str(&format!(
            r#"<w:rFonts w:ascii="{family}" w:hAnsi="{family}" w:eastAsia="{family}" w:cs="{family}"/>"#
        ));
    }
    if let Some(color) = font.color {
        out.push_str(&format!(r#"<w:color w:val="{}"/>"#, color.to_hex()));
    }
    if let Some(size) = font.size_pt {
        let half_points = half_points(size);
        out.push_str(&format!(
            r#"<w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/>"#
        ));
    }
    out.push_str("</w:rPr>");
}

/// Font sizes are stored in half-points.
fn half_points(size_pt: f32) -> u32 {
    (size_pt.max(0.5) * 2.0).round() as u32
}

/// Drop characters XML 1.0 cannot represent.
pub(super) fn xml_safe(text: &str) -> String {
    text.chars()
        .filter(|&c| matches!(c, '\t' | '\n' | '\r') || c >= ' ')
        .filter(|&c| c != '\u{fffe}' && c != '\u{ffff}')
        .collect()
}
