//! City, month and day vocabularies plus the pure validation step that
//! turns raw user input into a [`FilterSelection`].

use std::fmt;

use chrono::Weekday;
use serde::Serialize;

use crate::error::ValidationError;

/// Months that the bikeshare datasets cover, in calendar order.
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Day names in the order chrono numbers them from Monday.
pub const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Weekdays in the same order as [`DAYS`].
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-case key used both for user input and the source mapping.
    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let wanted = normalize(raw);
        City::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or(ValidationError::UnknownCity(raw.trim().to_string()))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&title_case(self.key()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthFilter {
    All,
    /// Calendar month number, 1 (January) through 6 (June).
    Only(u32),
}

impl MonthFilter {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let wanted = normalize(raw);
        if wanted == ALL {
            return Ok(MonthFilter::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == wanted)
            .map(|idx| MonthFilter::Only(idx as u32 + 1))
            .ok_or(ValidationError::UnknownMonth(raw.trim().to_string()))
    }

    pub fn matches(self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Only(m) => f.write_str(&month_name(*m)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let wanted = normalize(raw);
        if wanted == ALL {
            return Ok(DayFilter::All);
        }
        DAYS.iter()
            .position(|d| *d == wanted)
            .map(|idx| DayFilter::Only(WEEKDAYS[idx]))
            .ok_or(ValidationError::UnknownDay(raw.trim().to_string()))
    }

    pub fn matches(self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => d == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All"),
            DayFilter::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

/// A validated (city, month, day) triple. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    /// Validates raw user strings. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn validate(city: &str, month: &str, day: &str) -> Result<Self, ValidationError> {
        Ok(FilterSelection {
            city: City::parse(city)?,
            month: MonthFilter::parse(month)?,
            day: DayFilter::parse(day)?,
        })
    }

    pub fn unfiltered(city: City) -> Self {
        FilterSelection {
            city,
            month: MonthFilter::All,
            day: DayFilter::All,
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "City: {}, Month/s: {}, Day/s of the week: {}",
            self.city.key().to_uppercase(),
            self.month.to_string().to_uppercase(),
            self.day.to_string().to_uppercase()
        )
    }
}

/// Parses a yes/no answer. Anything else is rejected so the caller can re-ask.
pub fn parse_yes_no(raw: &str) -> Result<bool, ValidationError> {
    match normalize(raw).as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(ValidationError::UnknownAnswer(raw.trim().to_string())),
    }
}

/// Full English name for a weekday, e.g. `"Monday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Title-cased month name for 1..=12, or the number itself outside that range.
pub fn month_name(month: u32) -> String {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    match month {
        1..=12 => NAMES[month as usize - 1].to_string(),
        other => other.to_string(),
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Upper-cases the first letter of every space separated word.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_parse_is_case_insensitive() {
        assert_eq!(City::parse("Chicago").unwrap(), City::Chicago);
        assert_eq!(City::parse("  NEW YORK CITY ").unwrap(), City::NewYorkCity);
        assert_eq!(City::parse("washington").unwrap(), City::Washington);
    }

    #[test]
    fn test_city_parse_rejects_unknown() {
        assert_eq!(
            City::parse("boston"),
            Err(ValidationError::UnknownCity("boston".to_string()))
        );
    }

    #[test]
    fn test_month_parse() {
        assert_eq!(MonthFilter::parse("all").unwrap(), MonthFilter::All);
        assert_eq!(MonthFilter::parse("January").unwrap(), MonthFilter::Only(1));
        assert_eq!(MonthFilter::parse("june").unwrap(), MonthFilter::Only(6));
        assert!(MonthFilter::parse("july").is_err());
        assert!(MonthFilter::parse("").is_err());
    }

    #[test]
    fn test_day_parse() {
        assert_eq!(DayFilter::parse("ALL").unwrap(), DayFilter::All);
        assert_eq!(DayFilter::parse("monday").unwrap(), DayFilter::Only(Weekday::Mon));
        assert_eq!(DayFilter::parse("Sunday").unwrap(), DayFilter::Only(Weekday::Sun));
        assert!(DayFilter::parse("funday").is_err());
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let err = FilterSelection::validate("chicago", "july", "funday").unwrap_err();
        assert_eq!(err, ValidationError::UnknownMonth("july".to_string()));
    }

    #[test]
    fn test_filter_matching() {
        assert!(MonthFilter::All.matches(12));
        assert!(MonthFilter::Only(3).matches(3));
        assert!(!MonthFilter::Only(3).matches(4));
        assert!(DayFilter::All.matches(Weekday::Sat));
        assert!(!DayFilter::Only(Weekday::Fri).matches(Weekday::Sat));
    }

    #[test]
    fn test_selection_display() {
        let sel = FilterSelection::validate("new york city", "march", "friday").unwrap();
        assert_eq!(
            sel.to_string(),
            "City: NEW YORK CITY, Month/s: MARCH, Day/s of the week: FRIDAY"
        );
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("Yes"), Ok(true));
        assert_eq!(parse_yes_no(" no "), Ok(false));
        assert!(parse_yes_no("maybe").is_err());
        assert!(parse_yes_no("y").is_err());
        assert!(parse_yes_no("n").is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(weekday_name(Weekday::Wed), "Wednesday");
        assert_eq!(month_name(6), "June");
        assert_eq!(month_name(13), "13");
        assert_eq!(title_case("new york city"), "New York City");
        assert_eq!(City::NewYorkCity.to_string(), "New York City");
    }
}
