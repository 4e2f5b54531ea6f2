//! Reading candidate postcodes from files.

use crate::utils::error::{PostcodeError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// One candidate per line. Blank lines are skipped; content is kept as-is.
pub fn read_lines<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        inputs.push(line);
    }
    Ok(inputs)
}

/// Reads the named column from delimited data with a header row.
pub fn read_column<R: Read>(reader: R, column: &str, delimiter: u8) -> Result<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let index = headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| PostcodeError::MissingColumnError {
            column: column.to_string(),
        })?;

    let mut inputs = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        inputs.push(record.get(index).unwrap_or_default().to_string());
    }

    tracing::debug!("Read {} values from column '{}'", inputs.len(), column);
    Ok(inputs)
}

pub fn read_inputs_from_path<P: AsRef<Path>>(
    path: P,
    column: Option<&str>,
    delimiter: u8,
) -> Result<Vec<String>> {
    let path = path.as_ref();
    tracing::info!("Reading postcodes from {}", path.display());
    let file = File::open(path)?;

    match column {
        Some(column) => read_column(file, column, delimiter),
        None => read_lines(file),
    }
}
