//! Rendering and persistence of extracted tag tables.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::extract::TagFrequency;

/// One row of the tag report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub token: String,
    pub count: u64,
}

/// Flatten a frequency table into report rows, ascending by token.
#[must_use]
pub fn format_tags(freq: &TagFrequency) -> Vec<TagEntry> {
    freq.iter()
        .map(|(token, &count)| TagEntry {
            token: token.clone(),
            count,
        })
        .collect()
}

/// Render the `token: count` text form, one entry per line.
#[must_use]
pub fn render_tags(freq: &TagFrequency) -> String {
    freq.iter()
        .map(|(token, count)| format!("{token}: {count}\n"))
        .collect()
}

/// Render the table as a JSON array of `{token, count}` objects.
pub fn render_tags_json(freq: &TagFrequency) -> Result<String> {
    Ok(serde_json::to_string_pretty(&format_tags(freq))?)
}

/// Write the report to `path`, one `token: count` line per entry.
///
/// The report is rendered fully in memory and written in a single call,
/// so a failed write never leaves a half-sorted file behind.
pub fn save_tags(path: &Path, freq: &TagFrequency) -> Result<()> {
    let rendered = render_tags(freq);
    fs::write(path, rendered).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(entries = freq.len(), path = %path.display(), "saved tag report");
    Ok(())
}
