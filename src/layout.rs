//! Document composition.
//!
//! Consumes the sorted picture inventory in a single pass and produces a
//! [`DocumentModel`] under one of two layouts:
//!
//! - **Linear**: one picture block followed by one caption block per picture.
//! - **Table**: rows of a fixed column count. Odd-indexed cells (0-based)
//!   take the next picture from the queue, even-indexed cells take the
//!   caption of the most recently placed picture. Rows keep coming while
//!   pictures remain or a caption is still pending, so the final caption
//!   lands in a trailing partially-filled row; leftover cells stay blank.
//!
//! Each picture is probed for dimensions and classified, which picks the
//! sizing rule: portrait pictures are pinned to the configured height,
//! landscape to the configured width. A probe failure never aborts the
//! document; the picture is sized as landscape and the failure is collected
//! as a warning on the compose result.

use crate::config::{DocConfig, FormatMode};
use crate::naming;
use crate::orient::{self, Orientation};
use crate::probe;
use crate::scan::PictureRef;
use serde::Serialize;
use std::collections::VecDeque;

/// How a picture block is scaled in the document. The free axis follows the
/// aspect ratio, preserving it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SizeHint {
    /// Landscape: pin the width, in inches.
    Width(f64),
    /// Portrait: pin the height, in inches.
    Height(f64),
}

/// One block of the linear flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    Picture { filename: String, size: SizeHint },
    Caption(String),
}

/// One cell of a table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Cell {
    Blank,
    Picture { filename: String, size: SizeHint },
    Caption(String),
}

/// Composed document, ready for the renderer.
#[derive(Debug, Serialize)]
pub enum DocumentModel {
    Linear(Vec<Block>),
    Table { columns: u32, rows: Vec<Vec<Cell>> },
}

impl DocumentModel {
    /// Pictures placed in the document, across both layouts.
    pub fn picture_count(&self) -> usize {
        match self {
            DocumentModel::Linear(blocks) => blocks
                .iter()
                .filter(|b| matches!(b, Block::Picture { .. }))
                .count(),
            DocumentModel::Table { rows, .. } => rows
                .iter()
                .flatten()
                .filter(|c| matches!(c, Cell::Picture { .. }))
                .count(),
        }
    }
}

/// A per-file probe failure absorbed during composition.
#[derive(Debug, Serialize)]
pub struct ProbeWarning {
    pub filename: String,
    pub reason: String,
}

/// Output of [`compose`]: the model plus whatever went wrong per file.
#[derive(Debug)]
pub struct ComposeResult {
    pub model: DocumentModel,
    pub warnings: Vec<ProbeWarning>,
}

/// Lay out the inventory into a document under the configured format.
pub fn compose(pictures: &[PictureRef], config: &DocConfig) -> ComposeResult {
    let mut warnings = Vec::new();
    let model = match config.format {
        FormatMode::Linear => {
            DocumentModel::Linear(compose_linear(pictures, config, &mut warnings))
        }
        FormatMode::Table => DocumentModel::Table {
            columns: config.table_columns,
            rows: compose_table(pictures, config, &mut warnings),
        },
    };
    ComposeResult { model, warnings }
}

/// Probe and classify one picture, degrading to landscape on failure.
fn orientation_of(
    pic: &PictureRef,
    config: &DocConfig,
    warnings: &mut Vec<ProbeWarning>,
) -> Orientation {
    match probe::probe(&config.root.join(&pic.filename)) {
        Ok(dims) => orient::classify(dims),
        Err(err) => {
            warnings.push(ProbeWarning {
                filename: pic.filename.clone(),
                reason: err.to_string(),
            });
            Orientation::Landscape
        }
    }
}

fn size_hint(orientation: Orientation, config: &DocConfig) -> SizeHint {
    match orientation {
        Orientation::Portrait => SizeHint::Height(config.picture_height_in),
        Orientation::Landscape => SizeHint::Width(config.picture_width_in),
    }
}

fn compose_linear(
    pictures: &[PictureRef],
    config: &DocConfig,
    warnings: &mut Vec<ProbeWarning>,
) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(pictures.len() * 2);
    for pic in pictures {
        let size = size_hint(orientation_of(pic, config, warnings), config);
        blocks.push(Block::Picture {
            filename: pic.filename.clone(),
            size,
        });
        blocks.push(Block::Caption(naming::caption_stem(&pic.filename).to_string()));
    }
    blocks
}

fn compose_table(
    pictures: &[PictureRef],
    config: &DocConfig,
    warnings: &mut Vec<ProbeWarning>,
) -> Vec<Vec<Cell>> {
    // Config validation guarantees at least 2 columns, so every row has at
    // least one picture cell and the queue always drains.
    let columns = config.table_columns as usize;
    let mut queue: VecDeque<&PictureRef> = pictures.iter().collect();
    let mut pending_caption: Option<String> = None;
    let mut rows = Vec::new();

    while !queue.is_empty() || pending_caption.is_some() {
        let mut cells = Vec::with_capacity(columns);
        for idx in 0..columns {
            if idx % 2 == 0 {
                cells.push(match pending_caption.take() {
                    Some(caption) => Cell::Caption(caption),
                    None => Cell::Blank,
                });
            } else {
                match queue.pop_front() {
                    Some(pic) => {
                        let size = size_hint(orientation_of(pic, config, warnings), config);
                        pending_caption =
                            Some(naming::caption_stem(&pic.filename).to_string());
                        cells.push(Cell::Picture {
                            filename: pic.filename.clone(),
                            size,
                        });
                    }
                    None => cells.push(Cell::Blank),
                }
            }
        }
        rows.push(cells);
    }
    rows
}
