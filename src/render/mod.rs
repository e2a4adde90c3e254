//! Renderer module — JSON emission and output placement.

pub mod json;

use crate::error::ExtractError;
use crate::model::DocumentationSet;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write the rendered set to `output`, or to stdout when `output` is `-`.
///
/// Files are written through a temporary sibling and renamed into place,
/// so a failed run never leaves a partial or stale-looking output file.
/// The temporary file is created owner-only; the result is made
/// world-readable like any other build artifact.
pub fn write_output(
    set: &DocumentationSet,
    output: &Path,
    pretty: bool,
) -> Result<(), ExtractError> {
    let rendered = json::render(set, pretty)?;

    if output.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        return stdout
            .write_all(rendered.as_bytes())
            .map_err(|e| ExtractError::io(output, e));
    }

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ExtractError::io(dir, e))?;
    tmp.write_all(rendered.as_bytes())
        .map_err(|e| ExtractError::io(tmp.path(), e))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| ExtractError::io(tmp.path(), e))?;
    }
    tmp.persist(output)
        .map_err(|e| ExtractError::io(output, e.error))?;
    Ok(())
}

