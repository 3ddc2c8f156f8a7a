//! Console rendering of the four statistics sections.
//!
//! Each `print_*` function computes its statistic, prints it under a section
//! header, and closes the section with the elapsed time and a rule line.

use std::io::Write;
use std::time::Instant;

use bikeshare_core::error::Result;
use bikeshare_core::formatting::{format_duration, format_number, format_value, pad, rule_line};
use bikeshare_data::stats::{
    duration_stats, station_stats, time_stats, user_stats, Availability,
};
use bikeshare_data::table::TripTable;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// Shown in place of any statistic that has no value for an empty table.
pub const NO_DATA: &str = "No data available";

pub const GENDER_NOT_AVAILABLE: &str = "Gender data is not available.";
pub const BIRTH_YEAR_NOT_AVAILABLE: &str = "Birth year data is not available.";

fn or_no_data<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| NO_DATA.to_string())
}

fn open_section<W: Write>(out: &mut W, title: &str) -> Result<Instant> {
    writeln!(out, "\n{}\n", title)?;
    Ok(Instant::now())
}

fn close_section<W: Write>(out: &mut W, started: Instant) -> Result<()> {
    let elapsed = started.elapsed().as_secs_f64();
    writeln!(out, "\nThis took {} seconds.", elapsed)?;
    writeln!(out, "{}", rule_line())?;
    Ok(())
}

// ── Sections ──────────────────────────────────────────────────────────────────

/// Most frequent month, weekday and start hour.
pub fn print_time_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    let started = open_section(out, "About to calculate most frequent times of travel...")?;

    let stats = time_stats(table);
    writeln!(out, "Most Common Month: {}", or_no_data(stats.most_common_month))?;
    writeln!(out, "Most Common Day of Week: {}", or_no_data(stats.most_common_day))?;
    writeln!(out, "Most Common Start Hour: {}", or_no_data(stats.most_common_hour))?;

    debug!("time stats: {:?}", stats);
    close_section(out, started)
}

/// Most popular start station, end station and trip.
pub fn print_station_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    let started = open_section(out, "Calculating The Most Popular Stations and Trip...")?;

    let stats = station_stats(table);
    writeln!(
        out,
        "Most Commonly Used Start Station: {}",
        or_no_data(stats.most_common_start_station.as_deref())
    )?;
    writeln!(
        out,
        "Most Commonly Used End Station: {}",
        or_no_data(stats.most_common_end_station.as_deref())
    )?;
    writeln!(
        out,
        "Most Frequent Combination of Start Station and End Station Trip: {}",
        or_no_data(stats.most_common_trip.as_deref())
    )?;

    close_section(out, started)
}

/// Total and mean travel time, in seconds with a humanised form alongside.
pub fn print_duration_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    let started = open_section(out, "Calculating Trip Duration...")?;

    let stats = duration_stats(table);
    writeln!(
        out,
        "Total Travel Time: {} seconds ({})",
        format_value(stats.total_seconds),
        format_duration(stats.total_seconds)
    )?;
    match stats.mean_seconds {
        Some(mean) => writeln!(
            out,
            "Mean Travel Time: {} seconds ({})",
            format_number(mean, 2),
            format_duration(mean)
        )?,
        None => writeln!(out, "Mean Travel Time: {}", NO_DATA)?,
    }

    close_section(out, started)
}

/// User types, gender and birth year, with explicit notices for columns the
/// city does not publish.
pub fn print_user_stats<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    let started = open_section(out, "Calculating User Stats...")?;

    let stats = user_stats(table);

    writeln!(out, "Counts of user types:")?;
    if stats.user_types.is_empty() {
        writeln!(out, "{}", NO_DATA)?;
    } else {
        let name_width = stats
            .user_types
            .iter()
            .map(|(t, _)| t.width())
            .max()
            .unwrap_or(0);
        let count_width = stats
            .user_types
            .iter()
            .map(|(_, n)| n.to_string().width())
            .max()
            .unwrap_or(0);
        for (user_type, count) in &stats.user_types {
            writeln!(
                out,
                "{}    {}",
                pad(user_type, name_width, false),
                pad(&count.to_string(), count_width, true)
            )?;
        }
    }

    match stats.gender {
        Availability::Present(counts) => {
            writeln!(out, "\nCounts of gender:")?;
            writeln!(out, "Male: {}", counts.male)?;
            writeln!(out, "Female: {}", counts.female)?;
        }
        Availability::Empty => {
            writeln!(out, "\nCounts of gender:")?;
            writeln!(out, "{}", NO_DATA)?;
        }
        Availability::Missing => writeln!(out, "\n{}", GENDER_NOT_AVAILABLE)?,
    }

    match stats.birth_year {
        Availability::Present(years) => {
            writeln!(out, "\nEarliest year of birth: {}", years.earliest)?;
            writeln!(out, "Most recent year of birth: {}", years.most_recent)?;
            writeln!(out, "Most common year of birth: {}", years.most_common)?;
        }
        Availability::Empty => {
            writeln!(out, "\nEarliest year of birth: {}", NO_DATA)?;
            writeln!(out, "Most recent year of birth: {}", NO_DATA)?;
            writeln!(out, "Most common year of birth: {}", NO_DATA)?;
        }
        Availability::Missing => writeln!(out, "\n{}", BIRTH_YEAR_NOT_AVAILABLE)?,
    }

    close_section(out, started)
}

/// All four sections in their usual order.
pub fn print_all<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    print_time_stats(out, table)?;
    print_station_stats(out, table)?;
    print_duration_stats(out, table)?;
    print_user_stats(out, table)
}
