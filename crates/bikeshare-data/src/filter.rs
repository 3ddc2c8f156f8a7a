//! Month and day-of-week filtering over a loaded [`TripTable`].

use bikeshare_core::models::{DayFilter, MonthFilter};
use tracing::debug;

use crate::table::TripTable;

/// Rows of `table` whose start month and weekday pass both filters.
///
/// Row order is preserved. `All` on an axis leaves that axis unrestricted,
/// so `(All, All)` returns a row-for-row copy of the input.
pub fn apply_filters(table: &TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    let filtered = table.retain_where(|r| month.matches(r.month) && day.matches(r.day_of_week));
    debug!(
        "Filter month={} day={} kept {}/{} rows",
        month,
        day,
        filtered.len(),
        table.len()
    );
    filtered
}
