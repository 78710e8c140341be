//! Zip packaging of the document parts.

use super::{parts, DocumentBuilder};
use std::io::{self, Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub(super) fn write_package(doc: &DocumentBuilder) -> io::Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let opt = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let entries: [(&str, String); 8] = [
        ("[Content_Types].xml", parts::CONTENT_TYPES.to_string()),
        ("_rels/.rels", parts::PACKAGE_RELS.to_string()),
        ("docProps/core.xml", parts::core_properties(doc.metadata())),
        ("docProps/app.xml", parts::APP_PROPERTIES.to_string()),
        ("word/document.xml", doc.document_xml()),
        ("word/styles.xml", parts::STYLES.to_string()),
        ("word/numbering.xml", parts::NUMBERING.to_string()),
        ("word/_rels/document.xml.rels", parts::DOCUMENT_RELS.to_string()),
    ];

    for (name, contents) in entries {
        zip.start_file(name, opt).map_err(io::Error::other)?;
        zip.write_all(contents.as_bytes())?;
    }

    let cursor = zip.finish().map_err(io::Error::other)?;
    Ok(cursor.into_inner())
}
