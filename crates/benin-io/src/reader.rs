//! CSV parsing for yearly series and the projects table.
//!
//! Every failure maps to [`Error::DataUnavailable`] naming the dataset and,
//! where one exists, the offending line.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use benin_core::{Dataset, Error, Metric, Observation, ProjectRecord, Result};
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::sources::DatasetSource;

/// Parse a yearly series from any reader.
///
/// Only `year_field` and `value_field` are read; other columns are ignored.
/// Years must be integers in strictly ascending order.
pub fn parse_dataset<R: Read>(
    name: &str,
    year_field: &str,
    value_field: &str,
    reader: R,
) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|err| Error::data_unavailable(name, err))?
        .clone();
    let year_idx = column_index(&headers, year_field)
        .ok_or_else(|| Error::data_unavailable(name, format!("missing column {year_field}")))?;
    let value_idx = column_index(&headers, value_field)
        .ok_or_else(|| Error::data_unavailable(name, format!("missing column {value_field}")))?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|err| Error::data_unavailable(name, err))?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        let raw_year = record.get(year_idx).unwrap_or_default();
        let year = raw_year.parse::<i32>().map_err(|_| {
            Error::data_unavailable(name, format!("line {line}: year {raw_year:?} is not an integer"))
        })?;

        let raw_value = record.get(value_idx).unwrap_or_default();
        let value = Metric::parse(raw_value).ok_or_else(|| {
            Error::data_unavailable(
                name,
                format!("line {line}: {value_field} {raw_value:?} is not numeric"),
            )
        })?;

        rows.push(Observation::new(year, value));
    }

    debug!(dataset = name, rows = rows.len(), "parsed dataset");
    Dataset::new(name, year_field, value_field, rows)
}

/// Load one series from `dir/source.file`.
pub fn load_dataset(dir: &Path, source: &DatasetSource) -> Result<Dataset> {
    let path = dir.join(source.file);
    let file = File::open(&path).map_err(|err| {
        Error::data_unavailable(source.name, format!("{}: {err}", path.display()))
    })?;
    parse_dataset(source.name, source.year_field, source.value_field, file)
}

/// Parse the projects table, keeping file row order.
pub fn parse_projects<R: Read>(reader: R) -> Result<Vec<ProjectRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut out = Vec::new();
    for result in rdr.deserialize() {
        let record: ProjectRecord = result.map_err(|err| Error::data_unavailable("Projets", err))?;
        out.push(record);
    }
    Ok(out)
}

/// Read `projets.csv` from disk.
pub fn read_projects(path: impl AsRef<Path>) -> Result<Vec<ProjectRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|err| Error::data_unavailable("Projets", format!("{}: {err}", path.display())))?;
    parse_projects(file)
}

fn column_index(headers: &StringRecord, field: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim_start_matches('\u{feff}') == field)
}
