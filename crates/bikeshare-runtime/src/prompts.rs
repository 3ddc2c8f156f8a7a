//! Interactive selection of city, month and day.

use std::io::{BufRead, Write};

use bikeshare_core::error::Result;
use bikeshare_core::formatting::rule_line;
use bikeshare_core::models::{City, DayFilter, FilterSelection, MonthFilter};
use tracing::info;

use crate::console::Console;

pub const GREETING: &str =
    "Hello! Let's see some data for cities in the United States regarding bike usage!";

const CITY_PROMPT: &str = "Would you like to see data for Chicago, New York City, or Washington? ";
const CITY_ERROR: &str =
    "Invalid input. Please enter a valid city name (Chicago, New York City, Washington).";

const MONTH_PROMPT: &str = "Which month? January, February, March, April, May, June, or 'all' to apply no month filter? ";
const MONTH_ERROR: &str =
    "Invalid input. Please enter a valid month (January, February, March, April, May, June) or 'all'.";

const DAY_PROMPT: &str = "Which day? Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday, or 'all' to apply no day filter? ";
const DAY_ERROR: &str = "Invalid input. Please enter a valid day (Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday) or 'all'.";

/// Ask for city, month and day in turn, re-prompting until each is valid.
///
/// Answers are case-insensitive. Prints the greeting first and a rule line
/// once all three answers are accepted.
pub fn get_filters<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<FilterSelection> {
    writeln!(console.out(), "{}", GREETING)?;

    let city = console.ask_until(CITY_PROMPT, CITY_ERROR, |a| a.parse::<City>().ok())?;
    let month = console.ask_until(MONTH_PROMPT, MONTH_ERROR, |a| a.parse::<MonthFilter>().ok())?;
    let day = console.ask_until(DAY_PROMPT, DAY_ERROR, |a| a.parse::<DayFilter>().ok())?;

    writeln!(console.out(), "{}", rule_line())?;

    let selection = FilterSelection::new(city, month, day);
    info!("Filters selected: {}", selection);
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::error::BikeshareError;
    use chrono::Weekday;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<FilterSelection>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = get_filters(&mut console);
        (result, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_get_filters_first_try() {
        let (result, out) = run("chicago\nmarch\nall\n");
        assert_eq!(
            result.unwrap(),
            FilterSelection::new(City::Chicago, MonthFilter::Only(3), DayFilter::All)
        );
        assert!(out.starts_with(GREETING));
        assert!(out.ends_with(&format!("{}\n", rule_line())));
        assert!(!out.contains("Invalid input"));
    }

    #[test]
    fn test_get_filters_mixed_case() {
        let (result, _) = run("New York City\nALL\nFriday\n");
        assert_eq!(
            result.unwrap(),
            FilterSelection::new(
                City::NewYorkCity,
                MonthFilter::All,
                DayFilter::Only(Weekday::Fri)
            )
        );
    }

    #[test]
    fn test_get_filters_retries_each_prompt() {
        let (result, out) = run("boston\n\nWashington\njuly\nJune\nfri\nweekend\nSunday\n");
        assert_eq!(
            result.unwrap(),
            FilterSelection::new(
                City::Washington,
                MonthFilter::Only(6),
                DayFilter::Only(Weekday::Sun)
            )
        );
        assert_eq!(out.matches(CITY_ERROR).count(), 2);
        assert_eq!(out.matches(MONTH_ERROR).count(), 1);
        assert_eq!(out.matches(DAY_ERROR).count(), 2);
    }

    #[test]
    fn test_get_filters_every_valid_triple() {
        let months = ["january", "february", "march", "april", "may", "june", "all"];
        let days = [
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
            "sunday",
            "all",
        ];
        for city in City::ALL {
            for month in months {
                for day in days {
                    let input = format!(
                        "nowhere\n{}\n13\n{}\nsomeday\n{}\n",
                        city.key().to_uppercase(),
                        month,
                        day
                    );
                    let (result, _) = run(&input);
                    let selection = result.unwrap();
                    assert_eq!(selection.city, city);
                    assert_eq!(selection.month.name(), month);
                    assert_eq!(selection.day.name(), day);
                }
            }
        }
    }

    #[test]
    fn test_get_filters_reprompts_on_undecodable_city() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"chicago\nmarch\nall\n");
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let selection = get_filters(&mut console).unwrap();
        assert_eq!(selection.city, City::Chicago);
        assert_eq!(selection.month, MonthFilter::Only(3));
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out.matches(CITY_ERROR).count(), 1);
    }

    #[test]
    fn test_get_filters_input_closed() {
        let (result, _) = run("chicago\n");
        assert!(matches!(result, Err(BikeshareError::InputClosed)));
    }
}
