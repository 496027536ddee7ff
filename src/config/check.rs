//! Inspects a configuration file for keys that are missing (and would fall
//! back to defaults) or not recognised.

use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

pub const KNOWN_KEYS: [&str; 5] = [
    "default_period",
    "top_count",
    "separator_char",
    "color",
    "thousands_separator",
];

#[derive(Debug, Default, PartialEq)]
pub struct CheckReport {
    pub missing: Vec<String>,
    pub unknown: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

/// Compare the keys of a YAML document against the known configuration keys.
pub fn check_str(content: &str) -> AppResult<CheckReport> {
    let yaml: Value = serde_yaml::from_str(content)?;
    let map = match yaml {
        Value::Mapping(m) => m,
        Value::Null => Default::default(),
        _ => {
            return Err(AppError::Config(
                "configuration root must be a mapping".into(),
            ));
        }
    };

    let present: Vec<String> = map
        .keys()
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect();

    Ok(CheckReport {
        missing: KNOWN_KEYS
            .iter()
            .filter(|k| !present.iter().any(|p| p == *k))
            .map(|k| k.to_string())
            .collect(),
        unknown: present
            .into_iter()
            .filter(|p| !KNOWN_KEYS.contains(&p.as_str()))
            .collect(),
    })
}

pub fn check_file(path: &Path) -> AppResult<CheckReport> {
    let content = fs::read_to_string(path)?;
    check_str(&content)
}
