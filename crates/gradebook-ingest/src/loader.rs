use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::debug;

use gradebook_model::{CourseRecord, GRADES_PER_STUDENT, GradeRecord};

use crate::error::{IngestError, Result};

/// Header names required of a course catalog file, lowercase.
pub const COURSE_COLUMNS: [&str; 3] = ["curso", "carga_horaria", "preco"];

/// Header names required of a grade sheet file, lowercase.
pub const GRADE_COLUMNS: [&str; 1 + GRADES_PER_STUDENT] = ["nome", "n1", "n2", "n3", "n4", "n5"];

/// Reader configuration.
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Field delimiter. The legacy exports use `;`.
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { delimiter: b';' }
    }
}

/// Load a course catalog file into validated records.
pub fn read_courses(path: &Path, options: IngestOptions) -> Result<Vec<CourseRecord>> {
    let mut reader = open_reader(path, options)?;
    let columns = resolve_columns(path, &mut reader, &COURSE_COLUMNS)?;
    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = index + 1;
        let record = result.map_err(|source| csv_error(path, source))?;
        records.push(CourseRecord {
            name: cell(&record, columns[0]).to_string(),
            hours: parse_int(path, row, COURSE_COLUMNS[1], cell(&record, columns[1]))?,
            price: parse_float(path, row, COURSE_COLUMNS[2], cell(&record, columns[2]))?,
        });
    }
    debug!(path = %path.display(), count = records.len(), "course file loaded");
    Ok(records)
}

/// Load a grade sheet file into validated records.
pub fn read_grades(path: &Path, options: IngestOptions) -> Result<Vec<GradeRecord>> {
    let mut reader = open_reader(path, options)?;
    let columns = resolve_columns(path, &mut reader, &GRADE_COLUMNS)?;
    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = index + 1;
        let record = result.map_err(|source| csv_error(path, source))?;
        let mut grades = [0.0; GRADES_PER_STUDENT];
        for (slot, column) in GRADE_COLUMNS[1..].iter().enumerate() {
            grades[slot] = parse_float(path, row, column, cell(&record, columns[slot + 1]))?;
        }
        records.push(GradeRecord {
            name: cell(&record, columns[0]).to_string(),
            grades,
        });
    }
    debug!(path = %path.display(), count = records.len(), "grade file loaded");
    Ok(records)
}

fn open_reader(path: &Path, options: IngestOptions) -> Result<Reader<File>> {
    if !path.exists() {
        return Err(IngestError::NotFound {
            path: path.to_path_buf(),
        });
    }
    ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .from_path(path)
        .map_err(|source| csv_error(path, source))
}

/// Map each required column name to its header position.
///
/// Matching is case-insensitive; header cells are trimmed and stripped of a
/// UTF-8 BOM before comparison. Fails before any data row is interpreted.
fn resolve_columns(path: &Path, reader: &mut Reader<File>, required: &[&str]) -> Result<Vec<usize>> {
    let headers = reader
        .headers()
        .map_err(|source| csv_error(path, source))?;
    let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
    let mut columns = Vec::with_capacity(required.len());
    let mut missing = Vec::new();
    for name in required {
        match normalized.iter().position(|header| header == name) {
            Some(index) => columns.push(index),
            None => missing.push((*name).to_string()),
        }
    }
    if missing.is_empty() {
        Ok(columns)
    } else {
        Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            missing,
        })
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_lowercase()
}

fn cell<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("").trim()
}

fn parse_int(path: &Path, row: usize, column: &str, value: &str) -> Result<i64> {
    value
        .parse()
        .map_err(|_| conversion_error(path, row, column, value))
}

fn parse_float(path: &Path, row: usize, column: &str, value: &str) -> Result<f64> {
    value
        .parse()
        .map_err(|_| conversion_error(path, row, column, value))
}

fn conversion_error(path: &Path, row: usize, column: &str, value: &str) -> IngestError {
    IngestError::Conversion {
        path: path.to_path_buf(),
        row,
        column: column.to_string(),
        value: value.to_string(),
    }
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
