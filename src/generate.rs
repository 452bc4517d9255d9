//! Document rendering.
//!
//! Serializes a composed [`DocumentModel`] into a single self-contained HTML
//! file, `<title>.html`, written into the scan root so the relative `<img>`
//! references resolve against the pictures in place. The document prints
//! cleanly: picture sizes are emitted as CSS inch units, which print at
//! physical size and render proportionally on screen.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): templates are
//! type-checked Rust and interpolation is escaped by default. Base styles are
//! embedded at compile time from `static/style.css`.

use crate::layout::{Block, Cell, DocumentModel, SizeHint};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");

/// Render the model and write `<title>.html` under `out_dir`. Returns the
/// path written. Nothing touches the filesystem until rendering succeeded,
/// so a failed run leaves no partial document.
pub fn write_document(
    model: &DocumentModel,
    title: &str,
    out_dir: &Path,
) -> Result<PathBuf, GenerateError> {
    let markup = render_document(model, title);
    let path = out_dir.join(format!("{title}.html"));
    fs::write(&path, markup.into_string())?;
    Ok(path)
}

/// Full document markup. Pure; exposed for tests.
pub fn render_document(model: &DocumentModel, title: &str) -> Markup {
    let body = html! {
        h1 { (title) }
        @match model {
            DocumentModel::Linear(blocks) => {
                (render_linear(blocks))
            }
            DocumentModel::Table { rows, .. } => {
                (render_table(rows))
            }
        }
    };
    base_document(title, body)
}

fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) }
                style { (CSS) }
            }
            body {
                (content)
            }
        }
    }
}

fn render_linear(blocks: &[Block]) -> Markup {
    html! {
        main class="photo-flow" {
            @for block in blocks {
                @match block {
                    Block::Picture { filename, size } => {
                        img src=(filename) alt=(filename) style=(size_style(*size));
                    }
                    Block::Caption(text) => {
                        p class="caption" { (text) }
                    }
                }
            }
        }
    }
}

fn render_table(rows: &[Vec<Cell>]) -> Markup {
    html! {
        table class="photo-grid" {
            @for row in rows {
                tr {
                    @for cell in row {
                        td {
                            @match cell {
                                Cell::Blank => {}
                                Cell::Picture { filename, size } => {
                                    img src=(filename) alt=(filename) style=(size_style(*size));
                                }
                                Cell::Caption(text) => {
                                    p class="caption" { (text) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Inline style pinning one axis; the browser keeps the aspect ratio on the
/// other.
fn size_style(size: SizeHint) -> String {
    match size {
        SizeHint::Width(inches) => format!("width:{inches}in"),
        SizeHint::Height(inches) => format!("height:{inches}in"),
    }
}
