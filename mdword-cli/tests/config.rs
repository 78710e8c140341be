use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::io::{Cursor, Read};
use tempfile::tempdir;

fn read_part(path: &std::path::Path, name: &str) -> String {
    let bytes = fs::read(path).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn explicit_config_file_is_applied() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.md"), "> quoted\n").unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"[style.quote]
indent_inches = 1.0

[document]
title = "Configured"
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("mdword");
    cmd.current_dir(dir.path())
        .arg("in.md")
        .arg("out.docx")
        .arg("--config")
        .arg(config_path.as_os_str());
    cmd.assert().success();

    let out = dir.path().join("out.docx");
    assert!(read_part(&out, "word/document.xml").contains(r#"<w:ind w:left="1440"/>"#));
    assert!(read_part(&out, "docProps/core.xml").contains("<dc:title>Configured</dc:title>"));
}

#[test]
fn working_directory_config_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.md"), "```\ncode\n```\n").unwrap();
    fs::write(
        dir.path().join("mdword.toml"),
        "[style.code]\nfont = \"Menlo\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("mdword");
    cmd.current_dir(dir.path()).arg("in.md").arg("out.docx");
    cmd.assert().success();

    let xml = read_part(&dir.path().join("out.docx"), "word/document.xml");
    assert!(xml.contains(r#"w:ascii="Menlo""#));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.md"), "text").unwrap();

    let mut cmd = cargo_bin_cmd!("mdword");
    cmd.current_dir(dir.path())
        .arg("in.md")
        .arg("out.docx")
        .arg("--config")
        .arg("nope.toml");
    cmd.assert().failure().code(1);
}
