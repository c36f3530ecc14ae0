//! Form inputs: wake-up time, desired sleep, and daily coffee.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Time of day the user wants to wake up at (hour and minute only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WakeUpTime(NaiveTime);

impl WakeUpTime {
    /// Build from components.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        check_range("hour", hour, 23)?;
        check_range("minute", minute, 59)?;
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "wake_up".into(),
                message: format!("{hour}:{minute} is not a time of day"),
            })
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Seconds since midnight, the estimator's wake feature.
    pub fn seconds_since_midnight(&self) -> i64 {
        i64::from(self.hour()) * 3600 + i64::from(self.minute()) * 60
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl Default for WakeUpTime {
    fn default() -> Self {
        Self(NaiveTime::default() + chrono::Duration::hours(7))
    }
}

/// Keeps hour and minute, drops seconds.
impl From<NaiveTime> for WakeUpTime {
    fn from(time: NaiveTime) -> Self {
        Self(
            time.with_second(0)
                .and_then(|t| t.with_nanosecond(0))
                .unwrap_or(time),
        )
    }
}

impl FromStr for WakeUpTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::MalformedTime(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(malformed)?;
        let hour = parse_component(hour).ok_or_else(malformed)?;
        let minute = parse_component(minute).ok_or_else(malformed)?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for WakeUpTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WakeUpTime> for String {
    fn from(value: WakeUpTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for WakeUpTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn check_range(field: &str, value: u32, max: u32) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::from(max),
            value: i64::from(value),
        });
    }
    Ok(())
}

/// Desired hours of sleep.
///
/// The form limits this to [`SleepAmount::MIN`]..=[`SleepAmount::MAX`], but the
/// value is passed to the estimator as-is; use [`SleepAmount::checked`] to
/// validate at the edge.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SleepAmount(f64);

impl SleepAmount {
    pub const MIN: f64 = 4.0;
    pub const MAX: f64 = 12.0;

    pub fn new(hours: f64) -> Self {
        Self(hours)
    }

    /// Like [`SleepAmount::new`], but rejects values outside the form range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] for NaN or out-of-range hours.
    pub fn checked(hours: f64) -> Result<Self, ValidationError> {
        let amount = Self(hours);
        if amount.is_in_range() {
            Ok(amount)
        } else {
            Err(ValidationError::InvalidValue {
                field: "sleep_amount".into(),
                message: format!("{hours} hours is outside {}..={}", Self::MIN, Self::MAX),
            })
        }
    }

    pub fn hours(&self) -> f64 {
        self.0
    }

    pub fn is_in_range(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }
}

impl Default for SleepAmount {
    fn default() -> Self {
        Self(8.0)
    }
}

/// "8 hours", "8.25 hours".
impl fmt::Display for SleepAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.2}", self.0);
        let text = text.trim_end_matches('0').trim_end_matches('.');
        write!(f, "{text} hours")
    }
}

/// Cups of coffee per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoffeeCount(u32);

impl CoffeeCount {
    /// Lowest value the form offers.
    pub const FORM_MIN: u32 = 1;
    /// Highest value the form offers.
    pub const FORM_MAX: u32 = 12;

    pub fn new(cups: u32) -> Self {
        Self(cups)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for CoffeeCount {
    fn default() -> Self {
        Self(1)
    }
}

impl From<u32> for CoffeeCount {
    fn from(cups: u32) -> Self {
        Self(cups)
    }
}

impl fmt::Display for CoffeeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 cup")
        } else {
            write!(f, "{} cups", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wake_up_parses_hh_mm() {
        let wake: WakeUpTime = "07:30".parse().unwrap();
        assert_eq!(wake.hour(), 7);
        assert_eq!(wake.minute(), 30);
        assert_eq!(wake.seconds_since_midnight(), 27_000);

        let wake: WakeUpTime = "6:05".parse().unwrap();
        assert_eq!(wake.to_string(), "06:05");
    }

    #[test]
    fn wake_up_rejects_malformed_text() {
        for text in ["", "7", "07:", ":30", "7h30", "07:3a", "-1:00", "007:00"] {
            assert!(
                matches!(text.parse::<WakeUpTime>(), Err(ValidationError::MalformedTime(_))),
                "expected '{text}' to be rejected"
            );
        }
    }

    #[test]
    fn wake_up_rejects_out_of_range_components() {
        assert!(matches!(
            "24:00".parse::<WakeUpTime>(),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "hour"
        ));
        assert!(matches!(
            WakeUpTime::new(6, 60),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "minute"
        ));
    }

    #[test]
    fn wake_up_default_is_seven_am() {
        let wake = WakeUpTime::default();
        assert_eq!((wake.hour(), wake.minute()), (7, 0));
    }

    #[test]
    fn wake_up_from_naive_time_drops_seconds() {
        let time = NaiveTime::from_hms_milli_opt(6, 45, 59, 500).unwrap();
        let wake = WakeUpTime::from(time);
        assert_eq!(wake.as_naive_time(), NaiveTime::from_hms_opt(6, 45, 0).unwrap());
    }

    #[test]
    fn wake_up_serde_uses_text_form() {
        let json = serde_json::to_string(&WakeUpTime::new(22, 15).unwrap()).unwrap();
        assert_eq!(json, "\"22:15\"");
        assert!(serde_json::from_str::<WakeUpTime>("\"25:00\"").is_err());
    }

    #[test]
    fn sleep_amount_range() {
        assert!(SleepAmount::new(4.0).is_in_range());
        assert!(SleepAmount::new(12.0).is_in_range());
        assert!(!SleepAmount::new(3.75).is_in_range());
        assert!(!SleepAmount::new(f64::NAN).is_in_range());
        assert!(SleepAmount::checked(12.5).is_err());
        assert_eq!(SleepAmount::checked(8.25).unwrap().hours(), 8.25);
    }

    #[test]
    fn sleep_amount_display_trims_zeros() {
        assert_eq!(SleepAmount::new(8.0).to_string(), "8 hours");
        assert_eq!(SleepAmount::new(8.25).to_string(), "8.25 hours");
        assert_eq!(SleepAmount::new(7.5).to_string(), "7.5 hours");
    }

    #[test]
    fn coffee_display_inflects() {
        assert_eq!(CoffeeCount::new(1).to_string(), "1 cup");
        assert_eq!(CoffeeCount::new(3).to_string(), "3 cups");
        assert_eq!(CoffeeCount::new(0).to_string(), "0 cups");
    }
}
