use crate::errors::AppResult;
use crate::models::gain::Gain;
use crate::models::progress::Period;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct GainsDocument<'a> {
    period_days: u32,
    kind: &'a str,
    gains: &'a [Gain],
}

/// Writes ranked gains as a pretty-printed JSON document.
pub fn write_json(path: &Path, period: Period, kind: &str, gains: &[Gain]) -> AppResult<()> {
    let doc = GainsDocument {
        period_days: period.days(),
        kind,
        gains,
    };
    let json = serde_json::to_string_pretty(&doc)?;
    std::fs::write(path, json)?;
    Ok(())
}
