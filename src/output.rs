//! CLI output formatting.
//!
//! Each stage has a `format_*` function returning `Vec<String>` and a thin
//! `print_*` wrapper. Format functions are pure (no I/O) so tests can
//! assert on exact lines. Probe warnings go to stderr; everything else to
//! stdout.

use crate::layout::{DocumentModel, ProbeWarning};
use crate::scan::PictureRef;
use std::path::Path;

/// Inventory summary: count plus one indented line per picture.
pub fn format_scan_summary(root: &Path, pictures: &[PictureRef]) -> Vec<String> {
    let noun = if pictures.len() == 1 {
        "picture"
    } else {
        "pictures"
    };
    let mut lines = vec![format!(
        "Found {} {} in {}",
        pictures.len(),
        noun,
        root.display()
    )];
    lines.extend(pictures.iter().map(|p| format!("    {}", p.filename)));
    lines
}

pub fn print_scan_summary(root: &Path, pictures: &[PictureRef]) {
    for line in format_scan_summary(root, pictures) {
        println!("{line}");
    }
}

/// One line per picture whose dimensions could not be read.
pub fn format_probe_warnings(warnings: &[ProbeWarning]) -> Vec<String> {
    warnings
        .iter()
        .map(|w| {
            format!(
                "Warning: {}: {}; sized as landscape",
                w.filename, w.reason
            )
        })
        .collect()
}

pub fn print_probe_warnings(warnings: &[ProbeWarning]) {
    for line in format_probe_warnings(warnings) {
        eprintln!("{line}");
    }
}

/// Final line naming the written document and how much went into it.
pub fn format_generate_summary(written: &Path, model: &DocumentModel) -> Vec<String> {
    let layout = match model {
        DocumentModel::Linear(_) => "linear".to_string(),
        DocumentModel::Table { columns, .. } => format!("{columns}-column table"),
    };
    let count = model.picture_count();
    let noun = if count == 1 { "picture" } else { "pictures" };
    vec![format!(
        "Wrote {} ({} {}, {} layout)",
        written.display(),
        count,
        noun,
        layout
    )]
}

pub fn print_generate_summary(written: &Path, model: &DocumentModel) {
    for line in format_generate_summary(written, model) {
        println!("{line}");
    }
}
