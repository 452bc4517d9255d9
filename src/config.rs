//! Run configuration.
//!
//! One immutable [`DocConfig`] is built at startup from stock defaults
//! overlaid by whatever CLI overrides the operator passed, validated, and
//! then handed by reference into the scan and layout stages. Nothing mutates
//! it after construction.
//!
//! Validation happens before any filesystem access, so a bad flag combination
//! never leaves a partial document behind.

use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("--table-columns requires --format table")]
    TableColumnsWithoutTable,
    #[error("{0} must be a positive number")]
    NonPositiveSize(&'static str),
    #[error("--table-columns must be at least 2 (rows pair captions with pictures)")]
    TooFewColumns,
}

/// Document body layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum FormatMode {
    /// Flat sequence of picture + caption pairs.
    #[value(name = "normal")]
    Linear,
    /// Fixed-column grid alternating caption and picture cells.
    #[value(name = "table")]
    Table,
}

/// CLI overrides, all optional. Anything left `None` falls back to the
/// stock default when the config is built.
#[derive(Debug, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub title: Option<String>,
    pub append_date: Option<bool>,
    pub picture_width_in: Option<f64>,
    pub picture_height_in: Option<f64>,
    pub table_columns: Option<u32>,
    pub format: Option<FormatMode>,
}

/// Frozen settings for one run.
#[derive(Debug, Clone, Serialize)]
pub struct DocConfig {
    /// Directory scanned for pictures; also receives the output document.
    pub root: PathBuf,
    /// Document title, before the optional date suffix.
    pub title: String,
    /// Append `_DDMonYYYY` to the title.
    pub append_date: bool,
    /// Width in inches applied to landscape pictures.
    pub picture_width_in: f64,
    /// Height in inches applied to portrait pictures.
    pub picture_height_in: f64,
    /// Cells per row in table mode.
    pub table_columns: u32,
    pub format: FormatMode,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            title: "PhotoDoc".to_string(),
            append_date: true,
            picture_width_in: 4.0,
            picture_height_in: 4.0,
            table_columns: 2,
            format: FormatMode::Linear,
        }
    }
}

impl DocConfig {
    /// Stock defaults overlaid by CLI overrides, then validated.
    ///
    /// `--table-columns` outside table mode is a usage error, rejected
    /// before any document is written.
    pub fn from_overrides(overrides: Overrides) -> Result<DocConfig, ConfigError> {
        let format = overrides.format.unwrap_or(FormatMode::Linear);
        if overrides.table_columns.is_some() && format != FormatMode::Table {
            return Err(ConfigError::TableColumnsWithoutTable);
        }

        let defaults = DocConfig::default();
        let config = DocConfig {
            root: overrides.root.unwrap_or(defaults.root),
            title: overrides.title.unwrap_or(defaults.title),
            append_date: overrides.append_date.unwrap_or(defaults.append_date),
            picture_width_in: overrides.picture_width_in.unwrap_or(defaults.picture_width_in),
            picture_height_in: overrides
                .picture_height_in
                .unwrap_or(defaults.picture_height_in),
            table_columns: overrides.table_columns.unwrap_or(defaults.table_columns),
            format,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.picture_width_in.is_finite() || self.picture_width_in <= 0.0 {
            return Err(ConfigError::NonPositiveSize("--pic-width"));
        }
        if !self.picture_height_in.is_finite() || self.picture_height_in <= 0.0 {
            return Err(ConfigError::NonPositiveSize("--pic-height"));
        }
        if self.format == FormatMode::Table && self.table_columns < 2 {
            return Err(ConfigError::TooFewColumns);
        }
        Ok(())
    }

    /// Final document title: the configured title, suffixed with today's
    /// date when enabled.
    pub fn document_title(&self) -> String {
        self.title_on(Local::now().date_naive())
    }

    /// Title as of a given date. The suffix is `DDMonYYYY` with the English
    /// month abbreviation regardless of locale.
    pub fn title_on(&self, date: NaiveDate) -> String {
        if self.append_date {
            format!("{}_{}", self.title, date.format("%d%b%Y"))
        } else {
            self.title.clone()
        }
    }
}
