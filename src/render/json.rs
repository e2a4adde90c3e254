//! JSON renderer — the single output format.
//!
//! Top-level keys, in order: `files`, `functions`, `modules`,
//! `structures`, `enumerations`, `types`. Absent text is `null`.

use crate::error::ExtractError;
use crate::model::DocumentationSet;

pub fn render(set: &DocumentationSet, pretty: bool) -> Result<String, ExtractError> {
    let mut out = if pretty {
        serde_json::to_string_pretty(set)?
    } else {
        serde_json::to_string(set)?
    };
    out.push('\n');
    Ok(out)
}
