//! Availability resolution for a single provider-date.
//!
//! Whether a provider is bookable at an instant is decided by three exception
//! layers evaluated in a fixed precedence order: a day off beats a
//! date-specific override, which beats the recurring weekly template. The
//! precedence rule lives here as pure functions over a [`DaySchedule`]
//! snapshot, so it can be audited and tested without touching the store.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// The schedule layer that governs a date, ordered by precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleLayer {
    /// The provider marked the whole date off.
    DayOff,
    /// Date-specific slots replace the weekly template for this date.
    DateOverride,
    /// The recurring weekly template.
    Weekly,
}

/// Snapshot of every schedule layer for one provider on one calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule {
    pub day_off: bool,
    pub date_slots: Vec<NaiveTime>,
    pub weekly_slots: Vec<NaiveTime>,
}

impl DaySchedule {
    /// Returns the layer that decides availability for this date.
    ///
    /// A date with no slots in any layer still resolves to [`ScheduleLayer::Weekly`];
    /// an empty weekly template simply allows nothing.
    pub fn deciding_layer(&self) -> ScheduleLayer {
        if self.day_off {
            ScheduleLayer::DayOff
        } else if !self.date_slots.is_empty() {
            ScheduleLayer::DateOverride
        } else {
            ScheduleLayer::Weekly
        }
    }

    /// Whether the provider is bookable at `time_of_day` on this date.
    ///
    /// Slots are discrete instants: the time of day must equal a stored slot
    /// exactly. Only the deciding layer is consulted, so a weekly slot is
    /// never reachable on a date that carries an override.
    pub fn allows(&self, time_of_day: NaiveTime) -> bool {
        match self.deciding_layer() {
            ScheduleLayer::DayOff => false,
            ScheduleLayer::DateOverride => self.date_slots.contains(&time_of_day),
            ScheduleLayer::Weekly => self.weekly_slots.contains(&time_of_day),
        }
    }

    /// The slots that remain bookable on this date after precedence applies.
    pub fn bookable_slots(&self) -> &[NaiveTime] {
        match self.deciding_layer() {
            ScheduleLayer::DayOff => &[],
            ScheduleLayer::DateOverride => &self.date_slots,
            ScheduleLayer::Weekly => &self.weekly_slots,
        }
    }
}
