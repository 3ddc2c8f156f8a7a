//! The four descriptive statistics computed over a filtered [`TripTable`].
//!
//! Each function is stateless and tolerates an empty table: values with no
//! defined result for zero rows come back as `None` / [`Availability::Empty`].

use bikeshare_core::calculations::{mean, min_max, mode, sum, value_counts};

use crate::table::{TripTable, BIRTH_YEAR, GENDER};

// ── Availability ──────────────────────────────────────────────────────────────

/// Result of a statistic over an optional column.
#[derive(Debug, Clone, PartialEq)]
pub enum Availability<T> {
    /// The city file has no such column.
    Missing,
    /// The column exists but no row carries a value.
    Empty,
    Present(T),
}

// ── Time of travel ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub most_common_month: Option<u32>,
    pub most_common_day: Option<&'static str>,
    pub most_common_hour: Option<u32>,
}

/// Most frequent start month, weekday and hour.
pub fn time_stats(table: &TripTable) -> TimeStats {
    TimeStats {
        most_common_month: mode(table.iter().map(|r| r.month)),
        most_common_day: mode(table.iter().map(|r| r.day_of_week)),
        most_common_hour: mode(table.iter().map(|r| r.hour)),
    }
}

// ── Stations ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub most_common_start_station: Option<String>,
    pub most_common_end_station: Option<String>,
    /// Formatted `"<start> to <end>"`.
    pub most_common_trip: Option<String>,
}

/// Most popular start station, end station and start/end combination.
///
/// Blank station cells are skipped; a trip counts towards the combination
/// only when both ends are named.
pub fn station_stats(table: &TripTable) -> StationStats {
    StationStats {
        most_common_start_station: mode(
            table.iter().map(|r| r.start_station.as_str()).filter(|s| !s.is_empty()),
        )
        .map(str::to_string),
        most_common_end_station: mode(
            table.iter().map(|r| r.end_station.as_str()).filter(|s| !s.is_empty()),
        )
        .map(str::to_string),
        most_common_trip: mode(
            table
                .iter()
                .filter(|r| !r.start_station.is_empty() && !r.end_station.is_empty())
                .map(|r| r.route()),
        ),
    }
}

// ── Trip duration ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    /// Total seconds across all trips; `0.0` for an empty table.
    pub total_seconds: f64,
    pub mean_seconds: Option<f64>,
    pub trips: usize,
}

/// Total and mean trip duration.
pub fn duration_stats(table: &TripTable) -> DurationStats {
    let durations: Vec<f64> = table.iter().map(|r| r.trip_duration).collect();
    DurationStats {
        total_seconds: sum(&durations),
        mean_seconds: mean(&durations),
        trips: durations.len(),
    }
}

// ── Users ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenderCounts {
    pub male: usize,
    pub female: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    /// Trips per user type, most frequent first. Rows without a type are
    /// not counted.
    pub user_types: Vec<(String, usize)>,
    pub gender: Availability<GenderCounts>,
    pub birth_year: Availability<BirthYearStats>,
}

/// User-type breakdown plus gender and birth-year figures where the city
/// publishes them.
pub fn user_stats(table: &TripTable) -> UserStats {
    let user_types = value_counts(table.iter().filter_map(|r| r.user_type.as_deref()))
        .into_iter()
        .map(|(t, n)| (t.to_string(), n))
        .collect();

    UserStats {
        user_types,
        gender: gender_counts(table),
        birth_year: birth_year_stats(table),
    }
}

fn gender_counts(table: &TripTable) -> Availability<GenderCounts> {
    if !table.schema().has_column(GENDER) {
        return Availability::Missing;
    }
    let mut counts = GenderCounts::default();
    let mut seen = false;
    for gender in table.iter().filter_map(|r| r.gender.as_deref()) {
        seen = true;
        match gender {
            "Male" => counts.male += 1,
            "Female" => counts.female += 1,
            _ => {}
        }
    }
    if seen {
        Availability::Present(counts)
    } else {
        Availability::Empty
    }
}

fn birth_year_stats(table: &TripTable) -> Availability<BirthYearStats> {
    if !table.schema().has_column(BIRTH_YEAR) {
        return Availability::Missing;
    }
    let years: Vec<i32> = table.iter().filter_map(|r| r.birth_year).collect();
    match (min_max(years.iter().copied()), mode(years.iter().copied())) {
        (Some((earliest, most_recent)), Some(most_common)) => {
            Availability::Present(BirthYearStats {
                earliest,
                most_recent,
                most_common,
            })
        }
        _ => Availability::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::apply_filters;
    use crate::reader::read_trips;
    use bikeshare_core::models::{DayFilter, MonthFilter};
    use std::path::Path;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-03-06 08:10:00,,300,Clark St,Lake St,Subscriber,Male,1985.0
1,2017-03-06 08:40:00,,600,Clark St,Lake St,Subscriber,Female,1990.0
2,2017-03-07 17:05:00,,900,Lake St,Clark St,Customer,,
3,2017-01-10 17:15:00,,1200,Lake St,State St,Subscriber,Male,1985.0
4,2017-03-13 08:20:00,,150,State St,Lake St,,Unknown,1961.0
";

    const WASHINGTON: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-06-21 08:36:34,,489.5,14th & Belmont St NW,15th & K St NW,Subscriber
";

    fn load(body: &str) -> TripTable {
        read_trips(body.as_bytes(), Path::new("test.csv")).unwrap()
    }

    fn empty(body: &str) -> TripTable {
        apply_filters(&load(body), MonthFilter::Only(2), DayFilter::All)
    }

    // ── time_stats ────────────────────────────────────────────────────────────

    #[test]
    fn test_time_stats() {
        let stats = time_stats(&load(CHICAGO));
        assert_eq!(stats.most_common_month, Some(3));
        // Mon x3 (06, 06, 13), Tue x2 (07, 10).
        assert_eq!(stats.most_common_day, Some("Monday"));
        assert_eq!(stats.most_common_hour, Some(8));
    }

    #[test]
    fn test_time_stats_month_filter_fixes_month() {
        let table = apply_filters(&load(CHICAGO), MonthFilter::Only(3), DayFilter::All);
        assert_eq!(time_stats(&table).most_common_month, Some(3));
    }

    #[test]
    fn test_time_stats_empty() {
        let stats = time_stats(&empty(CHICAGO));
        assert_eq!(stats.most_common_month, None);
        assert_eq!(stats.most_common_day, None);
        assert_eq!(stats.most_common_hour, None);
    }

    // ── station_stats ─────────────────────────────────────────────────────────

    #[test]
    fn test_station_stats() {
        let stats = station_stats(&load(CHICAGO));
        // Clark St x2, Lake St x2 → tie goes to the alphabetically first.
        assert_eq!(stats.most_common_start_station.as_deref(), Some("Clark St"));
        assert_eq!(stats.most_common_end_station.as_deref(), Some("Lake St"));
        assert_eq!(stats.most_common_trip.as_deref(), Some("Clark St to Lake St"));
    }

    #[test]
    fn test_station_stats_skip_blank_stations() {
        let body = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 07:00:00,,100,,Lake St,Subscriber
2017-01-02 07:10:00,,100,,Lake St,Subscriber
2017-01-02 07:20:00,,100,,State St,Subscriber
2017-01-02 07:30:00,,100,Clark St,,Subscriber
2017-01-02 07:40:00,,100,Clark St,State St,Subscriber
";
        let stats = station_stats(&load(body));
        assert_eq!(stats.most_common_start_station.as_deref(), Some("Clark St"));
        assert_eq!(stats.most_common_end_station.as_deref(), Some("Lake St"));
        assert_eq!(stats.most_common_trip.as_deref(), Some("Clark St to State St"));
    }

    #[test]
    fn test_station_stats_all_blank_is_none() {
        let body = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 07:00:00,,100,,,Subscriber
";
        let stats = station_stats(&load(body));
        assert!(stats.most_common_start_station.is_none());
        assert!(stats.most_common_trip.is_none());
    }

    #[test]
    fn test_station_stats_empty() {
        let stats = station_stats(&empty(CHICAGO));
        assert!(stats.most_common_start_station.is_none());
        assert!(stats.most_common_end_station.is_none());
        assert!(stats.most_common_trip.is_none());
    }

    // ── duration_stats ────────────────────────────────────────────────────────

    #[test]
    fn test_duration_stats() {
        let stats = duration_stats(&load(CHICAGO));
        assert_eq!(stats.trips, 5);
        assert!((stats.total_seconds - 3150.0).abs() < 1e-9);
        assert!((stats.mean_seconds.unwrap() - 630.0).abs() < 1e-9);
    }

    #[test]
    fn test_duration_stats_empty() {
        let stats = duration_stats(&empty(CHICAGO));
        assert_eq!(stats.trips, 0);
        assert_eq!(stats.total_seconds, 0.0);
        assert!(stats.mean_seconds.is_none());
    }

    // ── user_stats ────────────────────────────────────────────────────────────

    #[test]
    fn test_user_stats_counts_types_descending() {
        let stats = user_stats(&load(CHICAGO));
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 1)]
        );
    }

    #[test]
    fn test_user_stats_gender_ignores_other_values() {
        let stats = user_stats(&load(CHICAGO));
        assert_eq!(
            stats.gender,
            Availability::Present(GenderCounts { male: 2, female: 1 })
        );
    }

    #[test]
    fn test_user_stats_birth_years() {
        let stats = user_stats(&load(CHICAGO));
        assert_eq!(
            stats.birth_year,
            Availability::Present(BirthYearStats {
                earliest: 1961,
                most_recent: 1990,
                most_common: 1985,
            })
        );
    }

    #[test]
    fn test_user_stats_missing_columns() {
        let stats = user_stats(&load(WASHINGTON));
        assert_eq!(stats.gender, Availability::Missing);
        assert_eq!(stats.birth_year, Availability::Missing);
        assert_eq!(stats.user_types, vec![("Subscriber".to_string(), 1)]);
    }

    #[test]
    fn test_user_stats_empty_table_keeps_schema_checks() {
        let stats = user_stats(&empty(CHICAGO));
        assert!(stats.user_types.is_empty());
        assert_eq!(stats.gender, Availability::Empty);
        assert_eq!(stats.birth_year, Availability::Empty);
    }

    #[test]
    fn test_user_stats_all_birth_years_blank_is_empty() {
        let body = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-02 07:00:00,,100,A,B,Subscriber,,
";
        let stats = user_stats(&load(body));
        assert_eq!(stats.gender, Availability::Empty);
        assert_eq!(stats.birth_year, Availability::Empty);
    }

    #[test]
    fn test_user_stats_gender_other_values_only_is_present() {
        let body = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-02 07:00:00,,100,A,B,Subscriber,Unknown,
";
        let stats = user_stats(&load(body));
        assert_eq!(stats.gender, Availability::Present(GenderCounts::default()));
    }
}
