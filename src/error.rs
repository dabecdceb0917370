//! Error types for data loading and preference storage

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CraftError>;

#[derive(Debug, Error)]
pub enum CraftError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("preference database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("failed to scan locale directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("unsupported language: {code}")]
    UnknownLanguage { code: String },

    #[error("recipe not found: {selector}")]
    RecipeNotFound { selector: String },
}

impl CraftError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
