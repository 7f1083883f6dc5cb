//! Slot template and availability.
//!
//! The template is the fixed, ascending list of bookable times of day; it is
//! the same for every calendar date. Availability is the template with each
//! entry marked occupied iff a non-cancelled appointment holds that exact time.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::booking::errors::BookingError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTemplate {
    times: Vec<NaiveTime>,
}

impl SlotTemplate {
    /// Accepts any order; stores ascending and deduplicated. Rejects an empty list.
    pub fn new(mut times: Vec<NaiveTime>) -> Result<Self, BookingError> {
        times.sort();
        times.dedup();
        if times.is_empty() {
            return Err(BookingError::Validation("slot template must not be empty".into()));
        }
        Ok(Self { times })
    }

    pub fn times(&self) -> &[NaiveTime] { &self.times }

    pub fn contains(&self, time: NaiveTime) -> bool { self.times.binary_search(&time).is_ok() }

    /// Each template entry in order, tagged against the occupied set.
    pub fn availability(&self, occupied: &[NaiveTime]) -> Vec<TimeSlot> {
        self.times
            .iter()
            .map(|&time| TimeSlot {
                time,
                status: if occupied.contains(&time) { SlotStatus::Occupied } else { SlotStatus::Available },
            })
            .collect()
    }
}

impl Default for SlotTemplate {
    /// 08:00 to 16:00 hourly, lunch hour excluded.
    fn default() -> Self {
        let times = [8, 9, 10, 11, 13, 14, 15, 16]
            .into_iter()
            .filter_map(|h| NaiveTime::from_hms_opt(h, 0, 0))
            .collect();
        Self { times }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Occupied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub status: SlotStatus,
}

/// `YYYY-MM-DD`, nothing else.
pub fn parse_date(raw: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| BookingError::Validation(format!("invalid date {raw:?}, expected YYYY-MM-DD")))
}

/// `HH:MM`, or `HH:MM:SS` as older clients send it.
pub fn parse_time(raw: &str) -> Result<NaiveTime, BookingError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| BookingError::Validation(format!("invalid time {raw:?}, expected HH:MM")))
}

/// Serde adapter writing times as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&t.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw).map_err(de::Error::custom)
    }
}
