// src/export/logic.rs

use crate::core::progress::rank_top_gains;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::models::progress::{GainKind, ProgressAnalysis};
use std::io;
use std::path::Path;
use tracing::info;

/// High level export of ranked gains.
pub struct ExportLogic;

impl ExportLogic {
    /// Rank the `kind` gains of `window` and write the top `count` to `file`.
    ///
    /// - `file` must be an absolute path
    /// - an existing file is only replaced with `force` or after confirmation
    /// - `color` applies to the status lines printed along the way
    ///
    /// Returns the number of rows written.
    pub fn export(
        window: &ProgressAnalysis,
        kind: GainKind,
        count: usize,
        format: ExportFormat,
        file: &str,
        force: bool,
        color: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::InvalidArgument(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force, &mut io::stdin().lock(), color)?;

        let period = window.period()?;
        let gains = rank_top_gains(window.progress.gains(kind), count);

        match format {
            ExportFormat::Csv => csv::write_csv(path, &gains)?,
            ExportFormat::Json => json::write_json(path, period, kind.as_str(), &gains)?,
        }

        info!(
            format = format.as_str(),
            rows = gains.len(),
            path = %path.display(),
            "gains exported"
        );
        notify_export_success(kind.label(), gains.len(), path, color);
        Ok(gains.len())
    }
}
