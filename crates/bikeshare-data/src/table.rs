//! In-memory trip table and its column schema.

use bikeshare_core::models::TripRecord;

// ── Column names ──────────────────────────────────────────────────────────────

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city file must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    START_TIME,
    END_TIME,
    TRIP_DURATION,
    START_STATION,
    END_STATION,
    USER_TYPE,
];

/// Columns computed at load time and shown after the source columns.
pub const DERIVED_COLUMNS: [&str; 2] = ["month", "day_of_week"];

// ── Schema ────────────────────────────────────────────────────────────────────

/// Ordered column names of a loaded city file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// `true` when the source file had a column called `name`.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// ── TripTable ─────────────────────────────────────────────────────────────────

/// A city's trips, in file order, together with the file's schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripTable {
    schema: Schema,
    records: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(schema: Schema, records: Vec<TripRecord>) -> Self {
        Self { schema, records }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    /// Rows `[start, end)`, clamped to the table length.
    pub fn rows(&self, start: usize, end: usize) -> &[TripRecord] {
        let end = end.min(self.records.len());
        let start = start.min(end);
        &self.records[start..end]
    }

    /// A new table with the same schema holding only rows matching `keep`.
    pub fn retain_where<F>(&self, mut keep: F) -> TripTable
    where
        F: FnMut(&TripRecord) -> bool,
    {
        TripTable {
            schema: self.schema.clone(),
            records: self.records.iter().filter(|r| keep(*r)).cloned().collect(),
        }
    }

    // ── Display ──────────────────────────────────────────────────────────────

    /// Header cells for the raw view: index, source columns, derived columns.
    pub fn display_headers(&self) -> Vec<String> {
        std::iter::once(String::new())
            .chain(self.schema.columns.iter().cloned())
            .chain(DERIVED_COLUMNS.iter().map(|c| c.to_string()))
            .collect()
    }

    /// Cells for one record in the raw view, aligned with [`display_headers`].
    ///
    /// [`display_headers`]: Self::display_headers
    pub fn display_row(&self, record: &TripRecord) -> Vec<String> {
        let mut cells = Vec::with_capacity(self.schema.len() + DERIVED_COLUMNS.len() + 1);
        cells.push(record.index.to_string());
        for i in 0..self.schema.len() {
            let raw = record.fields.get(i).map(String::as_str).unwrap_or("");
            cells.push(if raw.is_empty() {
                "NaN".to_string()
            } else {
                raw.to_string()
            });
        }
        cells.push(record.month.to_string());
        cells.push(record.day_of_week.to_string());
        cells
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
