use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Malformed template at byte {position}: {reason}\n{template}")]
    MalformedTemplate {
        template: String,
        position: usize,
        reason: String,
    },
    #[error("Unknown parameter '{name}' in template:\n{template}")]
    UnknownParameter { name: String, template: String },
    #[error("Failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
