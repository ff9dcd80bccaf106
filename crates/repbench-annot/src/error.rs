//! Error type shared by the annotation converters.

use std::path::PathBuf;

pub type Result<T, E = AnnotError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum AnnotError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{}: invalid known-repeats JSON", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{origin}: known-repeats file has no {section:?} section")]
    MissingSection {
        origin: String,
        section: &'static str,
    },

    #[error("record {id}: declared length {declared} but sequence has {actual} bases")]
    LengthMismatch {
        id: String,
        declared: usize,
        actual: usize,
    },

    #[error("line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("table has no {0:?} column")]
    MissingColumn(&'static str),

    #[error("line {line}: invalid {column} value {value:?}")]
    InvalidField {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
