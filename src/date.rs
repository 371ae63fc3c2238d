use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, Utc};
use std::fmt;

use crate::error::FetchError;

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// "Today is Monday, January 1st." for the local date.
pub fn today_sentence() -> String {
    today_sentence_for(Local::now().date_naive())
}

pub fn today_sentence_for(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "Today is {}, {} {}{}.",
        date.format("%A"),
        date.format("%B"),
        day,
        ordinal_suffix(day)
    )
}

/// Whole days between now and a target date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Countdown {
    DaysLeft { days: i64, event: String },
    Today,
    Passed { event: String },
}

impl Countdown {
    fn from_days(days: i64, event: &str) -> Self {
        match days {
            d if d > 0 => Countdown::DaysLeft {
                days: d,
                event: event.to_string(),
            },
            0 => Countdown::Today,
            _ => Countdown::Passed {
                event: event.to_string(),
            },
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::DaysLeft { days, event } => {
                write!(f, "There are {} days left until {}.", days, event)
            }
            Countdown::Today => write!(f, "Today is the day!"),
            // No spaces around the event name.
            Countdown::Passed { event } => write!(f, "The date of{}has already passed.", event),
        }
    }
}

pub fn countdown(end_date: &str, event: &str) -> Result<Countdown, FetchError> {
    countdown_from(Utc::now(), end_date, event)
}

/// True for exactly `dddd-dd-dd`. chrono alone also takes one-digit fields,
/// signed or short years and leading whitespace.
fn is_iso_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Counts from `now` to midnight UTC of `end_date`, truncating toward zero,
/// so anything less than a full day either side of the target is `Today`.
pub fn countdown_from(
    now: DateTime<Utc>,
    end_date: &str,
    event: &str,
) -> Result<Countdown, FetchError> {
    if !is_iso_date_shape(end_date) {
        return Err(FetchError::Parse(format!(
            "error parsing date: {:?} is not YYYY-MM-DD",
            end_date
        )));
    }
    let target = NaiveDate::parse_from_str(end_date, "%Y-%m-%d")?
        .and_time(NaiveTime::MIN)
        .and_utc();
    let days = (target - now).num_days();
    Ok(Countdown::from_days(days, event))
}
