use std::path::PathBuf;

use thiserror::Error;

/// Every way an analysis run can fail.  All variants are fatal.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data in {}: {detail}", path.display())]
    Parse { path: PathBuf, detail: String },

    #[error("column '{column}' not found (available: {})", available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("title '{title}' does not end in a '(YYYY)' release year")]
    MalformedTitle { title: String },

    #[error("column '{column}' has no values")]
    EmptyColumn { column: String },

    #[error("cannot sample {requested} rows from a table of {available}")]
    SampleTooLarge { requested: usize, available: usize },
}

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;
