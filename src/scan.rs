//! Picture inventory: non-recursive directory enumeration.
//!
//! Collects the filenames directly under the scan root whose extension is in
//! the recognized set, sorted lexicographically (byte order, case-sensitive).
//! The extension match is deliberately case-sensitive against the lower- and
//! upper-case spellings only: `photo.jpg` and `PHOTO.JPG` are included,
//! `photo.Jpg` is not. Subdirectories are never descended into.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("scan root does not exist or is not a directory: {0}")]
    PathNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A picture filename known to reside directly under the scan root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PictureRef {
    pub filename: String,
}

const PICTURE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "bmp", "gif", "JPG", "JPEG", "PNG", "BMP", "GIF",
];

/// Enumerate recognized pictures under `root`, sorted by filename.
///
/// Fatal if `root` is missing or not a directory; every other oddity (an
/// unreadable entry, a non-UTF-8 name) just drops that entry.
pub fn enumerate(root: &Path) -> Result<Vec<PictureRef>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::PathNotFound(root.to_path_buf()));
    }

    let mut names: Vec<String> = fs::read_dir(root)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| has_picture_extension(name))
        .collect();

    names.sort();

    Ok(names
        .into_iter()
        .map(|filename| PictureRef { filename })
        .collect())
}

fn has_picture_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PICTURE_EXTENSIONS.contains(&ext))
}
