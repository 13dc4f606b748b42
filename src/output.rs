// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::errors::AsmacError;
use crate::inference::DistanceMatrix;

// Shortest representation that reads back to the same f64, always with a decimal point
// ("0.0", "0.25", "1e-7").
fn format_distance(d: f64) -> String {
    format!("{:?}", d)
}

/// Writes the table: a header row (empty corner cell, then the labels), then one row per label.
pub fn write_distance_table<W: Write>(writer: W, matrix: &DistanceMatrix) -> Result<(), AsmacError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header_row: Vec<&str> = Vec::with_capacity(matrix.len() + 1);
    header_row.push("");
    header_row.extend(matrix.labels.iter().map(String::as_str));
    csv_writer.write_record(&header_row)?;

    for (label, row) in matrix.labels.iter().zip(matrix.values.rows()) {
        let mut record: Vec<String> = Vec::with_capacity(row.len() + 1);
        record.push(label.clone());
        record.extend(row.iter().map(|d| format_distance(*d)));
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the table to `path`. On failure the path is left as it was.
pub fn write_distance_csv(path: &Path, matrix: &DistanceMatrix) -> Result<(), AsmacError> {
    write_atomically(path, |file| write_distance_table(BufWriter::new(file), matrix))?;
    debug!("wrote {}x{} table to {}", matrix.len(), matrix.len(), path.display());
    Ok(())
}

// Fills a temporary file next to `path`, then renames it into place. The temporary file is
// removed if `fill` fails.
fn write_atomically<F>(path: &Path, fill: F) -> Result<(), AsmacError>
where
    F: FnOnce(&mut File) -> Result<(), AsmacError>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    fill(tmp.as_file_mut())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
