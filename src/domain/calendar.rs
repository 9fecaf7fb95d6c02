use crate::error::{Result, ScheduleError};
use chrono::{Datelike, Month, Months, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month of a specific year, such as "March 2024".
///
/// Stored as the first day of the month so that ordering and month arithmetic
/// come straight from `chrono`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth(NaiveDate);

impl CalendarMonth {
    /// Creates a calendar month from a year and a 1-based month number.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ScheduleError::InvalidRequest(format!(
                "month {month} must be between 1 and 12"
            )));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| {
                ScheduleError::InvalidRequest(format!(
                    "year {year} is outside the supported calendar range"
                ))
            })
    }

    pub fn from_month(year: i32, month: Month) -> Result<Self> {
        Self::new(year, month.number_from_month())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The month `months` months after this one.
    pub fn offset(&self, months: u32) -> Result<Self> {
        self.0
            .checked_add_months(Months::new(months))
            .map(Self)
            .ok_or_else(|| {
                ScheduleError::InvalidRequest(format!(
                    "{months} months after {self} is outside the supported calendar range"
                ))
            })
    }

    /// Human-readable "Month Year" label, e.g. "January 2025".
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%B %Y"))
    }
}

impl FromStr for CalendarMonth {
    type Err = ScheduleError;

    /// Parses a "Month Year" label. Month names are case-insensitive and may
    /// be abbreviated to three letters.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(year), None) => {
                let month = name.parse::<Month>().map_err(|_| {
                    ScheduleError::InvalidInput(format!("unknown month name '{name}'"))
                })?;
                let year = year.parse::<i32>().map_err(|_| {
                    ScheduleError::InvalidInput(format!("invalid year '{year}'"))
                })?;
                Self::from_month(year, month)
            }
            _ => Err(ScheduleError::InvalidInput(format!(
                "expected '<Month> <Year>', got '{s}'"
            ))),
        }
    }
}

impl Serialize for CalendarMonth {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(CalendarMonth::new(2024, 3).unwrap().label(), "March 2024");
        assert_eq!(CalendarMonth::new(2025, 12).unwrap().label(), "December 2025");
    }

    #[test]
    fn test_invalid_month_number() {
        assert!(matches!(
            CalendarMonth::new(2024, 0),
            Err(ScheduleError::InvalidRequest(_))
        ));
        assert!(matches!(
            CalendarMonth::new(2024, 13),
            Err(ScheduleError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_year_out_of_range() {
        assert!(matches!(
            CalendarMonth::new(i32::MAX, 1),
            Err(ScheduleError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_offset_wraps_year() {
        let december = CalendarMonth::new(2024, 12).unwrap();
        let next = december.offset(1).unwrap();
        assert_eq!((next.year(), next.month()), (2025, 1));
        assert_eq!(december.offset(0).unwrap(), december);
        assert_eq!(december.offset(25).unwrap(), CalendarMonth::new(2027, 1).unwrap());
    }

    #[test]
    fn test_offset_matches_modular_arithmetic() {
        for start_month in 1..=12u32 {
            let start = CalendarMonth::new(2024, start_month).unwrap();
            for i in 0..48u32 {
                let elapsed = start_month - 1 + i;
                let expected = CalendarMonth::new(2024 + (elapsed / 12) as i32, elapsed % 12 + 1)
                    .unwrap();
                assert_eq!(start.offset(i).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_ordering_is_chronological() {
        let nov = CalendarMonth::new(2024, 11).unwrap();
        let jan = CalendarMonth::new(2025, 1).unwrap();
        assert!(nov < jan);
    }

    #[test]
    fn test_parse_label() {
        let month: CalendarMonth = "March 2024".parse().unwrap();
        assert_eq!(month, CalendarMonth::new(2024, 3).unwrap());

        let month: CalendarMonth = "  sep   2026 ".parse().unwrap();
        assert_eq!(month, CalendarMonth::new(2026, 9).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "Smarch 2024".parse::<CalendarMonth>(),
            Err(ScheduleError::InvalidInput(_))
        ));
        assert!(matches!(
            "March".parse::<CalendarMonth>(),
            Err(ScheduleError::InvalidInput(_))
        ));
        assert!(matches!(
            "March 20x4".parse::<CalendarMonth>(),
            Err(ScheduleError::InvalidInput(_))
        ));
        assert!(matches!(
            "March 2024 extra".parse::<CalendarMonth>(),
            Err(ScheduleError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&CalendarMonth::new(2024, 1).unwrap()).unwrap();
        assert_eq!(json, "\"January 2024\"");
    }
}
