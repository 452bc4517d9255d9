//! Full-pipeline tests: scan → compose → generate over a real directory.

use photodoc::config::{DocConfig, FormatMode, Overrides};
use photodoc::{generate, layout, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// PNG signature + IHDR with the given dimensions; junk CRC.
fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[8, 2, 0, 0, 0]);
    data.extend_from_slice(&[0; 4]);
    data
}

/// SOI + baseline frame header with the given dimensions.
fn jpeg_bytes(width: u16, height: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xC0]);
    data.extend_from_slice(&17u16.to_be_bytes());
    data.push(8);
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    data.push(3);
    for id in 1u8..=3 {
        data.extend_from_slice(&[id, 0x11, 0x00]);
    }
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

fn config_for(root: &Path, format: FormatMode) -> DocConfig {
    DocConfig::from_overrides(Overrides {
        root: Some(root.to_path_buf()),
        title: Some("Report".to_string()),
        append_date: Some(false),
        picture_width_in: Some(5.0),
        picture_height_in: Some(3.0),
        format: Some(format),
        ..Overrides::default()
    })
    .unwrap()
}

fn run_pipeline(config: &DocConfig) -> String {
    let pictures = scan::enumerate(&config.root).unwrap();
    let composed = layout::compose(&pictures, config);
    let title = config.document_title();
    let written = generate::write_document(&composed.model, &title, &config.root).unwrap();
    fs::read_to_string(written).unwrap()
}

#[test]
fn linear_document_orders_and_sizes_pictures() {
    let tmp = TempDir::new().unwrap();
    // written out of order; the document must sort by filename
    fs::write(tmp.path().join("b.png"), png_bytes(10, 20)).unwrap();
    fs::write(tmp.path().join("a.jpg"), jpeg_bytes(30, 10)).unwrap();
    fs::write(tmp.path().join("notes.txt"), b"ignored").unwrap();

    let config = config_for(tmp.path(), FormatMode::Linear);
    let page = run_pipeline(&config);

    // a.jpg is landscape → width-bound; b.png is portrait → height-bound
    let a = page.find("<img src=\"a.jpg\"").expect("a.jpg rendered");
    let b = page.find("<img src=\"b.png\"").expect("b.png rendered");
    assert!(a < b, "sorted order: a.jpg before b.png");
    assert!(page.contains("style=\"width:5in\""));
    assert!(page.contains("style=\"height:3in\""));
    assert!(page.contains("<p class=\"caption\">a</p>"));
    assert!(page.contains("<p class=\"caption\">b</p>"));
    assert!(!page.contains("notes"));
}

#[test]
fn output_file_is_named_after_title() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.jpg"), jpeg_bytes(30, 10)).unwrap();

    let config = config_for(tmp.path(), FormatMode::Linear);
    run_pipeline(&config);

    assert!(tmp.path().join("Report.html").is_file());
}

#[test]
fn table_document_keeps_every_picture() {
    let tmp = TempDir::new().unwrap();
    for name in ["p1.png", "p2.png", "p3.png"] {
        fs::write(tmp.path().join(name), png_bytes(10, 20)).unwrap();
    }

    let config = config_for(tmp.path(), FormatMode::Table);
    let page = run_pipeline(&config);

    assert_eq!(page.matches("<img src=").count(), 3);
    for caption in ["p1", "p2", "p3"] {
        assert!(page.contains(&format!("<p class=\"caption\">{caption}</p>")));
    }
}

#[test]
fn empty_directory_produces_empty_document() {
    let tmp = TempDir::new().unwrap();

    let config = config_for(tmp.path(), FormatMode::Linear);
    let page = run_pipeline(&config);

    assert!(page.contains("<h1>Report</h1>"));
    assert!(!page.contains("<img"));
}

#[test]
fn malformed_picture_still_appears_landscape_sized() {
    let tmp = TempDir::new().unwrap();
    let mut broken = png_bytes(10, 20);
    broken[5] = 0x00; // corrupt the signature tail
    fs::write(tmp.path().join("broken.png"), broken).unwrap();

    let config = config_for(tmp.path(), FormatMode::Linear);
    let pictures = scan::enumerate(&config.root).unwrap();
    let composed = layout::compose(&pictures, &config);

    assert_eq!(composed.warnings.len(), 1);
    assert_eq!(composed.model.picture_count(), 1);

    let title = config.document_title();
    let written = generate::write_document(&composed.model, &title, &config.root).unwrap();
    let page = fs::read_to_string(written).unwrap();
    assert!(page.contains("<img src=\"broken.png\""));
    assert!(page.contains("style=\"width:5in\""));
}

#[test]
fn missing_scan_root_aborts_before_any_output() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("nowhere");

    let result = scan::enumerate(&root);
    assert!(result.is_err());
    assert!(!tmp.path().join("Report.html").exists());
}

#[test]
fn table_columns_without_table_mode_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.jpg"), jpeg_bytes(30, 10)).unwrap();

    let result = DocConfig::from_overrides(Overrides {
        root: Some(tmp.path().to_path_buf()),
        table_columns: Some(3),
        ..Overrides::default()
    });
    assert!(result.is_err());
    assert_eq!(
        fs::read_dir(tmp.path()).unwrap().count(),
        1,
        "only the input picture remains"
    );
}
