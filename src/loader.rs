//! XML loader — select compound files from the input directory and parse them.
//!
//! Selection is an allow-list of filename globs; anything else in the
//! directory is never read. Any unreadable or malformed file is fatal.

use crate::error::ExtractError;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Raw text of one selected XML file. The parsed tree borrows from it.
#[derive(Debug)]
pub struct XmlSource {
    pub path: PathBuf,
    pub text: String,
}

/// List the files in `dir` (non-recursive) whose names match any pattern.
///
/// Sorted and deduplicated so every run visits files in the same order.
pub fn discover(dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, ExtractError> {
    let patterns = patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| ExtractError::Glob {
                pattern: p.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let entries = fs::read_dir(dir).map_err(|e| ExtractError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ExtractError::io(dir, e))?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if patterns.iter().any(|p| p.matches(name)) {
            files.push(path);
        } else {
            trace!(file = name, "not in include list");
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

pub fn read(path: &Path) -> Result<XmlSource, ExtractError> {
    let text = fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))?;
    Ok(XmlSource {
        path: path.to_path_buf(),
        text,
    })
}

/// Parse a source into a read-only tree.
pub fn parse(source: &XmlSource) -> Result<roxmltree::Document<'_>, ExtractError> {
    let mut options = roxmltree::ParsingOptions::default();
    options.allow_dtd = true;
    let doc = roxmltree::Document::parse_with_options(&source.text, options).map_err(|e| {
        ExtractError::Xml {
            path: source.path.clone(),
            source: e,
        }
    })?;
    debug!(file = %source.path.display(), "parsed");
    Ok(doc)
}
