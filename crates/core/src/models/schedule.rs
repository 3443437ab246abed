use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::BookingError;

/// Format accepted for schedule slots, e.g. "10:00".
pub const SLOT_FORMAT: &str = "%H:%M";

/// Day of the week a weekly slot recurs on. Stored lowercase in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(DayOfWeek::Monday),
            "tuesday" => Ok(DayOfWeek::Tuesday),
            "wednesday" => Ok(DayOfWeek::Wednesday),
            "thursday" => Ok(DayOfWeek::Thursday),
            "friday" => Ok(DayOfWeek::Friday),
            "saturday" => Ok(DayOfWeek::Saturday),
            "sunday" => Ok(DayOfWeek::Sunday),
            _ => Err(BookingError::Validation(format!(
                "not a valid week day: {s}"
            ))),
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// Parses a single "HH:MM" slot into a time of day.
pub fn parse_slot(slot: &str) -> Result<NaiveTime, BookingError> {
    NaiveTime::parse_from_str(slot, SLOT_FORMAT)
        .map_err(|_| BookingError::Validation(format!("invalid time slot format: {slot}")))
}

/// Parses a full slot set, rejecting the whole set on the first bad entry.
pub fn parse_slots(slots: &[String]) -> Result<Vec<NaiveTime>, BookingError> {
    slots.iter().map(|s| parse_slot(s)).collect()
}

pub fn format_slot(slot: NaiveTime) -> String {
    slot.format(SLOT_FORMAT).to_string()
}

/// A recurring bookable instant, valid every week on its weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySlot {
    pub provider_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub slot: NaiveTime,
}

/// A bookable instant valid only on one calendar date. Any date slot for a
/// date replaces the weekly template for that date entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateSlot {
    pub provider_id: Uuid,
    pub date: NaiveDate,
    pub slot: NaiveTime,
}

/// A full-day unavailability marker, overriding both slot layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOff {
    pub provider_id: Uuid,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetDayOffRequest {
    pub date: NaiveDate,
    pub is_day_off: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceWeeklySlotsRequest {
    pub day_of_week: String,
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceDateSlotsRequest {
    pub date: NaiveDate,
    pub slots: Vec<String>,
}

/// A provider's view of one calendar date: upcoming days off, the slots that
/// survive precedence for that date, and the times already booked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayScheduleResponse {
    pub date: NaiveDate,
    pub days_off: Vec<NaiveDate>,
    pub slots: Vec<String>,
    pub appointments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}
