use std::fs::File;
use std::path::Path;

use crate::error::{AnalysisError, Result};

use super::model::Table;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a comma-delimited, UTF-8 file with a header row.
///
/// Column types are inferred from the full column, see
/// [`ColumnType::infer`](super::model::ColumnType::infer).
pub fn load_csv(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| AnalysisError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(AnalysisError::Parse {
            path: path.to_path_buf(),
            detail: "missing header row".to_string(),
        });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(path, e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let table = Table::from_text_rows(path, headers, rows)?;
    log::debug!(
        "{}: {} rows, columns {:?}",
        path.display(),
        table.len(),
        table.columns().iter().zip(table.column_types()).collect::<Vec<_>>()
    );
    Ok(table)
}

fn csv_error(path: &Path, err: csv::Error) -> AnalysisError {
    let detail = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => AnalysisError::FileAccess {
            path: path.to_path_buf(),
            source,
        },
        _ => AnalysisError::Parse {
            path: path.to_path_buf(),
            detail,
        },
    }
}
