use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{TracemarkError, TracemarkResult};

/// Behavior switches for a [`crate::PuzzleSession`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionOpts {
    /// Mark the puzzle resolved as soon as the paint matches the watermark.
    pub auto_resolve: bool,
    /// Show the watermark right after it is captured.
    pub show_on_capture: bool,
}

impl SessionOpts {
    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TracemarkResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TracemarkError::serde(format!("parse session options JSON: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TracemarkResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TracemarkError::validation(format!(
                "open session options JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/opts.rs"]
mod tests;
