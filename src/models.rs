use crate::error::FactoidError;
use chrono::{Datelike, Local, Month, NaiveDate};
use log::debug;
use serde::Deserialize;
use std::fmt;

const DATE_FORMATS: &[&str] = &["%B %d %Y", "%b %d %Y", "%m/%d %Y"];

/// Month and day pair driving both lookups; the year is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// Month and day of the host clock's current local date.
    pub fn today() -> Self {
        let now = Local::now();
        MonthDay {
            month: now.month(),
            day: now.day(),
        }
    }

    /// Parse user text such as "April 21", "Apr 21" or "04/21".
    /// Formats are tried in that order; the first successful parse wins.
    pub fn parse(input: &str) -> Result<Self, FactoidError> {
        // Borrow a fixed leap year so the year-less formats resolve to a
        // real date and Feb 29 stays parseable.
        let dated = format!("{} 2000", input.trim());
        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(&dated, fmt) {
                debug!("Parsed {:?} as {}/{}", input, date.month(), date.day());
                return Ok(MonthDay {
                    month: date.month(),
                    day: date.day(),
                });
            }
        }
        Err(FactoidError::UnparsableDate {
            input: input.to_string(),
        })
    }

    /// English month name, or "Unknown" when the month is out of range.
    pub fn month_name(&self) -> &'static str {
        Month::try_from(self.month as u8)
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    pub(crate) fn in_range(&self) -> bool {
        (1..=12).contains(&self.month) && (1..=31).contains(&self.day)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.day)
    }
}

/// One historical event from the on-this-day feed.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub year: i32,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct OnThisDay {
    #[serde(default)]
    events: Vec<Event>,
}

/// Parse the event list from a JSON body returned by the on-this-day feed.
pub fn parse_events(data: &str) -> Result<Vec<Event>, FactoidError> {
    let parsed: OnThisDay =
        serde_json::from_str(data).map_err(|_| FactoidError::InvalidResponse)?;
    debug!("Parsed {} events", parsed.events.len());
    Ok(parsed.events)
}
