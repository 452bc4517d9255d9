//! # PhotoDoc
//!
//! Turn a folder of photos into a single shareable report document. Point it
//! at a directory; it finds every recognized picture, works out which way
//! each one is oriented by reading only the file headers, and writes one
//! HTML document with every picture sized consistently and captioned by
//! filename.
//!
//! # Pipeline
//!
//! One run is a straight-line pass through four stages:
//!
//! ```text
//! 1. Configure   defaults + CLI overrides  →  frozen DocConfig
//! 2. Scan        directory                 →  sorted picture inventory
//! 3. Compose     inventory + config        →  DocumentModel (+ warnings)
//! 4. Generate    DocumentModel             →  <title>.html in the scan root
//! ```
//!
//! Everything is synchronous and single-threaded; the whole run touches the
//! filesystem read-only except for the one output file, written last.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Immutable run configuration from defaults + CLI overrides |
//! | [`scan`] | Non-recursive inventory of recognized picture files |
//! | [`probe`] | Width/height from raw PNG/GIF/JPEG/BMP headers |
//! | [`orient`] | Portrait/landscape classification, square → portrait |
//! | [`naming`] | Caption derivation from filenames |
//! | [`layout`] | Composition into linear or table document models |
//! | [`generate`] | Maud-rendered HTML document output |
//! | [`output`] | Operator-facing summary and warning lines |
//!
//! # Design Decisions
//!
//! ## Header Probing, Not Image Decoding
//!
//! Orientation needs exactly two numbers per file. The [`probe`] module reads
//! them straight out of the format headers: a bounded prefix of each file,
//! parsed by pure functions with explicit bounds checks. No decoding crate,
//! no pixel data in memory, and a corrupt file costs a warning instead of a
//! crash: the layout engine falls back to landscape sizing and moves on.
//!
//! ## One Frozen Config
//!
//! Settings are collected once from defaults overlaid by CLI flags,
//! validated, and passed by reference into every stage. Invalid combinations
//! (table columns outside table mode, non-positive sizes) are rejected
//! before any filesystem access, so a bad invocation never leaves a partial
//! document behind.
//!
//! ## Maud Over Template Engines
//!
//! The document is rendered with [Maud](https://maud.lambda.xyz/):
//! malformed markup is a compile error, interpolation is escaped by default,
//! and there is no template directory to ship. Picture sizes are emitted as
//! CSS inch units so the report prints at physical size.

pub mod config;
pub mod generate;
pub mod layout;
pub mod naming;
pub mod orient;
pub mod output;
pub mod probe;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
