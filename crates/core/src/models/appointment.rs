use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::BookingError;

/// Guard interval a booking must clear beyond "now", so a request racing the
/// clock cannot land on an instant that is already in the past by commit time.
pub fn booking_lead_time() -> Duration {
    Duration::minutes(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Canceled,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Canceled => "canceled",
            AppointmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "canceled" => Ok(AppointmentStatus::Canceled),
            "completed" => Ok(AppointmentStatus::Completed),
            _ => Err(BookingError::Validation(format!(
                "invalid status value: {s}"
            ))),
        }
    }
}

/// A committed reservation of one provider-instant by one client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub provider_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// A candidate appointment, validated before it ever reaches storage.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub client_id: Uuid,
    pub provider_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
}

impl NewAppointment {
    /// Checks the booking invariants against the supplied clock.
    ///
    /// Slots are whole-minute instants, so anything with a seconds component
    /// could never match a schedule slot and is rejected up front.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), BookingError> {
        if self.client_id == self.provider_id {
            return Err(BookingError::InvalidAppointment(
                "a client cannot book an appointment with themselves".to_string(),
            ));
        }

        if self.scheduled_at.second() != 0 || self.scheduled_at.nanosecond() != 0 {
            return Err(BookingError::InvalidAppointment(
                "scheduled_at must fall on a whole minute".to_string(),
            ));
        }

        if self.scheduled_at <= now + booking_lead_time() {
            return Err(BookingError::InvalidAppointment(
                "scheduled_at must be in the future".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub provider_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentResponse {
    pub id: Uuid,
}
