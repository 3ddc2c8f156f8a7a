use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::error::BikeshareError;
use crate::time_utils::weekday_name;

/// Month names accepted by the month filter, in calendar order.
pub const MONTH_NAMES: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Day names accepted by the day filter, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Selector value meaning "no restriction on this axis".
pub const ALL: &str = "all";

// ── City ──────────────────────────────────────────────────────────────────────

/// One of the three cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every known city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case key the user types at the prompt.
    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// CSV file holding this city's trips, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Display name used in prompts and log lines.
    pub fn title(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| BikeshareError::UnknownCity(s.to_string()))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ── MonthFilter ───────────────────────────────────────────────────────────────

/// Month restriction: either every month or a single month in 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthFilter {
    All,
    /// 1-based calendar month number.
    Only(u32),
}

impl MonthFilter {
    /// `true` when a record started in `month` passes this filter.
    pub fn matches(self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m == month,
        }
    }

    /// Lower-case selector text, e.g. `"march"` or `"all"`.
    pub fn name(self) -> &'static str {
        match self {
            MonthFilter::All => ALL,
            MonthFilter::Only(m) => MONTH_NAMES[(m - 1) as usize],
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if key == ALL {
            return Ok(MonthFilter::All);
        }
        MONTH_NAMES
            .iter()
            .position(|m| *m == key)
            .map(|idx| MonthFilter::Only(idx as u32 + 1))
            .ok_or_else(|| BikeshareError::InvalidMonth(s.to_string()))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── DayFilter ─────────────────────────────────────────────────────────────────

/// Day-of-week restriction: either every day or a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// `true` when a record whose start day is named `day_name` passes.
    ///
    /// `day_name` is the capitalized full English name, e.g. `"Monday"`.
    pub fn matches(self, day_name: &str) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(day) => weekday_name(day) == day_name,
        }
    }

    /// Lower-case selector text, e.g. `"friday"` or `"all"`.
    pub fn name(self) -> &'static str {
        match self {
            DayFilter::All => ALL,
            DayFilter::Only(day) => DAY_NAMES[day.num_days_from_monday() as usize],
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if key == ALL {
            return Ok(DayFilter::All);
        }
        // chrono accepts abbreviations too; only full names are valid here.
        if !DAY_NAMES.contains(&key.as_str()) {
            return Err(BikeshareError::InvalidDay(s.to_string()));
        }
        key.parse::<Weekday>()
            .map(DayFilter::Only)
            .map_err(|_| BikeshareError::InvalidDay(s.to_string()))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── FilterSelection ───────────────────────────────────────────────────────────

/// The validated (city, month, day) triple for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city={}, month={}, day={}",
            self.city.key(),
            self.month,
            self.day
        )
    }
}

// ── TripRecord ────────────────────────────────────────────────────────────────

/// A single bike trip read from a city CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Zero-based position of the row in the source file.
    pub index: usize,
    /// Raw field text, aligned with the table schema.
    pub fields: Vec<String>,
    /// When the trip started.
    pub start_time: NaiveDateTime,
    /// When the trip ended, if the file recorded it.
    pub end_time: Option<NaiveDateTime>,
    /// Trip length in seconds.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    /// `"Subscriber"`, `"Customer"`, ... (missing on some rows).
    pub user_type: Option<String>,
    /// Only present in cities that publish gender.
    pub gender: Option<String>,
    /// Only present in cities that publish birth year.
    pub birth_year: Option<i32>,
    /// Derived: calendar month of `start_time` (1-12).
    pub month: u32,
    /// Derived: full English weekday name of `start_time`.
    pub day_of_week: &'static str,
    /// Derived: hour of day of `start_time` (0-23).
    pub hour: u32,
}

impl TripRecord {
    /// Build a record, deriving month, day-of-week and hour from `start_time`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index: usize,
        fields: Vec<String>,
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        trip_duration: f64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        Self {
            index,
            fields,
            month: start_time.month(),
            day_of_week: weekday_name(start_time.weekday()),
            hour: start_time.hour(),
            start_time,
            end_time,
            trip_duration,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year,
        }
    }

    /// `"<start> to <end>"`, the key used for the popular-trip statistic.
    pub fn route(&self) -> String {
        format!("{} to {}", self.start_station, self.end_station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    // ── City ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_city_parse_is_case_insensitive() {
        assert_eq!("Chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!("NEW YORK CITY".parse::<City>().unwrap(), City::NewYorkCity);
        assert_eq!("washington".parse::<City>().unwrap(), City::Washington);
    }

    #[test]
    fn test_city_parse_rejects_unknown() {
        assert!(matches!(
            "boston".parse::<City>(),
            Err(BikeshareError::UnknownCity(_))
        ));
        assert!("new york".parse::<City>().is_err());
    }

    #[test]
    fn test_city_file_mapping() {
        assert_eq!(City::Chicago.file_name(), "chicago.csv");
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert_eq!(City::Washington.file_name(), "washington.csv");
    }

    // ── MonthFilter ───────────────────────────────────────────────────────────

    #[test]
    fn test_month_filter_parse() {
        assert_eq!("all".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!("January".parse::<MonthFilter>().unwrap(), MonthFilter::Only(1));
        assert_eq!("MARCH".parse::<MonthFilter>().unwrap(), MonthFilter::Only(3));
        assert_eq!("june".parse::<MonthFilter>().unwrap(), MonthFilter::Only(6));
    }

    #[test]
    fn test_month_filter_rejects_second_half_of_year() {
        assert!(matches!(
            "july".parse::<MonthFilter>(),
            Err(BikeshareError::InvalidMonth(_))
        ));
        assert!("jan".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_month_filter_matches() {
        assert!(MonthFilter::All.matches(11));
        assert!(MonthFilter::Only(3).matches(3));
        assert!(!MonthFilter::Only(3).matches(4));
        assert_eq!(MonthFilter::Only(2).name(), "february");
    }

    // ── DayFilter ─────────────────────────────────────────────────────────────

    #[test]
    fn test_day_filter_parse() {
        assert_eq!("all".parse::<DayFilter>().unwrap(), DayFilter::All);
        assert_eq!(
            "Friday".parse::<DayFilter>().unwrap(),
            DayFilter::Only(Weekday::Fri)
        );
        assert_eq!(
            "SUNDAY".parse::<DayFilter>().unwrap(),
            DayFilter::Only(Weekday::Sun)
        );
    }

    #[test]
    fn test_day_filter_rejects_abbreviations() {
        assert!(matches!(
            "fri".parse::<DayFilter>(),
            Err(BikeshareError::InvalidDay(_))
        ));
        assert!("funday".parse::<DayFilter>().is_err());
    }

    #[test]
    fn test_day_filter_matches_capitalized_name() {
        let filter = DayFilter::Only(Weekday::Mon);
        assert!(filter.matches("Monday"));
        assert!(!filter.matches("monday"));
        assert!(!filter.matches("Tuesday"));
        assert!(DayFilter::All.matches("Sunday"));
        assert_eq!(filter.name(), "monday");
    }

    // ── TripRecord ────────────────────────────────────────────────────────────

    #[test]
    fn test_trip_record_derives_time_columns() {
        // 2017-03-03 was a Friday.
        let rec = TripRecord::new(
            0,
            vec![],
            ts("2017-03-03 17:45:10"),
            None,
            600.0,
            "A".to_string(),
            "B".to_string(),
            Some("Subscriber".to_string()),
            None,
            None,
        );
        assert_eq!(rec.month, 3);
        assert_eq!(rec.day_of_week, "Friday");
        assert_eq!(rec.hour, 17);
        assert_eq!(rec.route(), "A to B");
    }

    #[test]
    fn test_filter_selection_display() {
        let sel = FilterSelection::new(City::NewYorkCity, MonthFilter::Only(5), DayFilter::All);
        assert_eq!(sel.to_string(), "city=new york city, month=may, day=all");
    }
}
