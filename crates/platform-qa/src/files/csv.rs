//! Typed CSV fixture reader.
//!
//! The first row is the header and maps columns onto struct fields by name.
//! Lines starting with `#` are skipped.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::QaConfig;
use crate::error::CsvError;

pub const DEFAULT_SEPARATOR: u8 = b',';

pub fn read_csv_file<T, P>(path: P, separator: u8) -> Result<Vec<T>, CsvError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(separator)
        .has_headers(true)
        .comment(Some(b'#'))
        .from_path(path)
        .map_err(|e| CsvError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

    let records = reader
        .deserialize()
        .map(|record| {
            record.map_err(|e| CsvError::Record {
                path: path.to_path_buf(),
                line: e.position().map(|p| p.line()).unwrap_or_default(),
                source: e,
            })
        })
        .collect::<Result<Vec<T>, CsvError>>()?;

    tracing::debug!(
        file = %crate::sanitize::redact_path(path),
        records = records.len(),
        "CSV fixture loaded"
    );

    Ok(records)
}

pub fn read_csv_file_default<T, P>(path: P) -> Result<Vec<T>, CsvError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    read_csv_file(path, DEFAULT_SEPARATOR)
}

/// Reads with the separator configured in `csv_separator`.
pub fn read_csv_file_with_config<T, P>(config: &QaConfig, path: P) -> Result<Vec<T>, CsvError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    read_csv_file(path, config.csv_separator_byte())
}
