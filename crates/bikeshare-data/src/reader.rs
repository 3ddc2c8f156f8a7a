//! CSV loading for the per-city trip files.
//!
//! Reads a city file into a [`TripTable`], deriving month, weekday and hour
//! for every trip, then applies the session's month/day filters.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::models::{City, FilterSelection, TripRecord};
use bikeshare_core::time_utils::{parse_optional_timestamp, parse_trip_timestamp};
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use tracing::{debug, info};

use crate::filter::apply_filters;
use crate::table::{Schema, TripTable, REQUIRED_COLUMNS};

/// Typed view of one CSV row; optional columns default to `None` when the
/// city file does not carry them.
#[derive(Debug, Deserialize)]
struct TripRow {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Path of `city`'s file inside `data_dir`.
pub fn city_path(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.file_name())
}

/// Load the selected city and narrow it to the selected month and day.
///
/// Missing or malformed files are returned as errors; an empty result is
/// not an error.
pub fn load_data(data_dir: &Path, selection: &FilterSelection) -> Result<TripTable> {
    let table = load_city(data_dir, selection.city)?;
    let filtered = apply_filters(&table, selection.month, selection.day);
    info!(
        "Loaded {} of {} trips for {}",
        filtered.len(),
        table.len(),
        selection
    );
    Ok(filtered)
}

/// Load every trip for `city` from `data_dir`.
pub fn load_city(data_dir: &Path, city: City) -> Result<TripTable> {
    load_csv_file(&city_path(data_dir, city))
}

/// Load a trip file from an explicit path.
pub fn load_csv_file(path: &Path) -> Result<TripTable> {
    let started = Instant::now();
    let file = std::fs::File::open(path).map_err(|source| BikeshareError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_trips(std::io::BufReader::new(file), path)?;
    debug!(
        "Read {} rows from {} in {:.3}s",
        table.len(),
        path.display(),
        started.elapsed().as_secs_f64()
    );
    Ok(table)
}

/// Parse trip CSV from any reader. `source` is only used in error messages.
pub fn read_trips<R: Read>(reader: R, source: &Path) -> Result<TripTable> {
    let csv_err = |e: csv::Error| BikeshareError::Csv {
        path: source.to_path_buf(),
        source: e,
    };

    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = normalise_headers(rdr.headers().map_err(csv_err)?);

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(BikeshareError::MissingColumn {
                path: source.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let raw = result.map_err(csv_err)?;
        let line = raw.position().map(|p| p.line()).unwrap_or(0);
        let row: TripRow = raw
            .deserialize(Some(&headers))
            .map_err(|e| invalid(source, line, e.to_string()))?;
        records.push(to_record(index, &raw, row, source, line)?);
    }

    let schema = Schema::new(headers.iter().map(str::to_string).collect());
    Ok(TripTable::new(schema, records))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Name blank header cells `Unnamed: <position>`; the city files start with
/// an unnamed row-id column.
fn normalise_headers(raw: &StringRecord) -> StringRecord {
    raw.iter()
        .enumerate()
        .map(|(i, h)| {
            let h = h.trim();
            if h.is_empty() {
                format!("Unnamed: {}", i)
            } else {
                h.to_string()
            }
        })
        .collect()
}

fn to_record(
    index: usize,
    raw: &StringRecord,
    row: TripRow,
    source: &Path,
    line: u64,
) -> Result<TripRecord> {
    let start_time =
        parse_trip_timestamp(&row.start_time).map_err(|e| invalid(source, line, e.to_string()))?;
    let end_time = parse_optional_timestamp(row.end_time.as_deref())
        .map_err(|e| invalid(source, line, e.to_string()))?;

    if !row.trip_duration.is_finite() || row.trip_duration < 0.0 {
        return Err(invalid(
            source,
            line,
            format!("trip duration must be non-negative, got {}", row.trip_duration),
        ));
    }

    let birth_year = match row.birth_year {
        Some(y) if y.is_finite() => Some(y.trunc() as i32),
        Some(y) => return Err(invalid(source, line, format!("bad birth year {}", y))),
        None => None,
    };

    Ok(TripRecord::new(
        index,
        raw.iter().map(str::to_string).collect(),
        start_time,
        end_time,
        row.trip_duration,
        row.start_station,
        row.end_station,
        non_blank(row.user_type),
        non_blank(row.gender),
        birth_year,
    ))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn invalid(source: &Path, line: u64, message: String) -> BikeshareError {
    BikeshareError::InvalidRecord {
        path: source.to_path_buf(),
        line,
        message,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
