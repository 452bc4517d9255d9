//! Caption derivation from picture filenames.
//!
//! A caption is the filename truncated at the first `.`, which also cuts
//! multi-dot names short: `holiday.2024.jpg` captions as `holiday`.
//! Long-standing behavior; existing documents depend on it.

/// Text up to the first `.` of a filename. The whole name if there is no dot.
pub fn caption_stem(filename: &str) -> &str {
    match filename.find('.') {
        Some(dot) => &filename[..dot],
        None => filename,
    }
}
