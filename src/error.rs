//! Fatal extraction errors.
//!
//! Tolerated omissions (a parameter without a name, a missing description)
//! never surface here; they become `None` in the model.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML in {}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("missing <{element}> in {context}")]
    MissingElement { element: String, context: String },

    #[error("missing `{attribute}` attribute on <{element}>")]
    MissingAttribute { attribute: String, element: String },

    #[error("invalid include pattern {pattern:?}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("invalid export marker {0:?}")]
    Marker(String),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
