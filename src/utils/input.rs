//! Loading JSON documents handed to the CLI.

use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read};
use tracing::debug;

/// Read `path`, or stdin when `path` is `-`.
pub fn read_document(path: &str) -> AppResult<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        debug!(bytes = buf.len(), "document read from stdin");
        return Ok(buf);
    }

    let content = fs::read_to_string(path)?;
    debug!(path, bytes = content.len(), "document read");
    Ok(content)
}

/// Read and decode a JSON document.
pub fn load_json<T: DeserializeOwned>(path: &str) -> AppResult<T> {
    let raw = read_document(path)?;
    Ok(serde_json::from_str(&raw)?)
}
