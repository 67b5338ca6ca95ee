//! Loading data sheets stored as JSON arrays of objects.

use std::io::BufReader;

use camino::Utf8Path;
use serde_json::{Map, Value};
use sommelier_core::{Record, RecordBatch};

use crate::CliError;
use crate::fs::open_utf8_file;

/// Load the sheet at `path` into a [`RecordBatch`].
///
/// Strings are kept verbatim; numbers and booleans are rendered as text;
/// `null` cells are dropped so the attribute falls back to its default.
pub(crate) fn load_records(path: &Utf8Path, field: &'static str) -> Result<RecordBatch, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenData {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<Map<String, Value>> = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| CliError::ParseData {
            field,
            path: path.to_path_buf(),
            source,
        })?;

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(row, object)| {
            record_from_object(object).map_err(|column| CliError::UnsupportedCell {
                field,
                path: path.to_path_buf(),
                row,
                column,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let batch = RecordBatch::new(records);
    log::debug!("loaded {} {field} rows from {path}", batch.len());
    Ok(batch)
}

/// Convert one JSON object, returning the offending column on failure.
pub(crate) fn record_from_object(object: Map<String, Value>) -> Result<Record, String> {
    let mut record = Record::default();
    for (column, value) in object {
        match value {
            Value::Null => {}
            Value::String(text) => record.insert(column, text),
            Value::Number(number) => record.insert(column, number.to_string()),
            Value::Bool(flag) => record.insert(column, flag.to_string()),
            Value::Array(_) | Value::Object(_) => return Err(column),
        }
    }
    Ok(record)
}
