//! Reading tool invocations from a transcript file or stdin.
//!
//! A transcript is either a JSON array of invocations or JSON Lines, one
//! invocation object per non-blank line.

use std::io::Read;
use std::path::Path;

use serde_json::Value;
use toolbadge_types::{BadgeError, Result, ToolInvocation};

/// Load a transcript from `path`, or from stdin when `path` is `None` or `-`.
pub fn load_transcript(path: Option<&Path>) -> Result<Vec<ToolInvocation>> {
    let raw = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_transcript(&raw)
}

/// Parse transcript text in either array or JSON Lines form.
pub fn parse_transcript(raw: &str) -> Result<Vec<ToolInvocation>> {
    if raw.trim_start().starts_with('[') {
        let entries: Vec<Value> = serde_json::from_str(raw)?;
        tracing::debug!(entries = entries.len(), "Parsed transcript as JSON array");
        return entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| decode_entry(index, entry))
            .collect();
    }

    let lines: Vec<&str> = raw.lines().filter(|l| !l.trim().is_empty()).collect();
    tracing::debug!(entries = lines.len(), "Parsing transcript as JSON Lines");
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let entry: Value =
                serde_json::from_str(line).map_err(|e| BadgeError::InvalidInvocation {
                    index,
                    message: e.to_string(),
                })?;
            decode_entry(index, entry)
        })
        .collect()
}

fn decode_entry(index: usize, entry: Value) -> Result<ToolInvocation> {
    serde_json::from_value(entry).map_err(|e| BadgeError::InvalidInvocation {
        index,
        message: e.to_string(),
    })
}
