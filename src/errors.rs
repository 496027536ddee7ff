//! Unified application error type.
//! The core computations are total; everything that can fail lives at the
//! boundary (files, JSON documents, configuration, exports) and returns
//! AppError so handlers can propagate with `?`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Document decoding
    // ---------------------------
    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported period: {0} days (expected 1, 7 or 30)")]
    InvalidPeriod(u32),

    #[error("No progress window for {0} days in the document")]
    MissingPeriod(u32),

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
