use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::{SalonError, SalonResult};

/// Wall-clock time within a single day, minute resolution. Always in range:
/// the only way in is through [`TimeOfDay::new`] or string parsing, both of
/// which reject out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> SalonResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(SalonError::InvalidTimeOfDay(format!(
                "{hour}:{minute} is out of range"
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub(crate) fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .expect("hour and minute are validated on construction")
    }
}

impl FromStr for TimeOfDay {
    type Err = SalonError;

    /// Accepts the salon service's `HH:MM` and `HH:MM:SS` forms; a seconds
    /// component is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SalonError::InvalidTimeOfDay(format!("'{s}' is not a valid HH:MM time"));

        let mut parts = s.split(':');
        let (hour, minute) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), None, None) => (h, m),
            (Some(h), Some(m), Some(_seconds), None) => (h, m),
            _ => return Err(invalid()),
        };

        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = SalonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// A salon's daily opening and closing boundaries. Single-day only, no
/// overnight wrap; `opening >= closing` means no bookable slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub opening: TimeOfDay,
    pub closing: TimeOfDay,
}

impl OperatingHours {
    pub fn new(opening: TimeOfDay, closing: TimeOfDay) -> Self {
        Self { opening, closing }
    }
}
