use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use slotbook_core::errors::{BookingError, BookingResult};
use slotbook_core::models::appointment::{Appointment, AppointmentStatus};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub provider_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DbAppointment {
    /// Converts the row into the domain model. A status value the application
    /// does not recognize means the row was written by something newer than
    /// this binary, so it surfaces as an internal error rather than a 4xx.
    pub fn into_model(self) -> BookingResult<Appointment> {
        let status: AppointmentStatus = self.status.parse().map_err(|_| {
            BookingError::Internal(format!("unknown appointment status: {}", self.status).into())
        })?;

        Ok(Appointment {
            id: self.id,
            client_id: self.client_id,
            provider_id: self.provider_id,
            scheduled_at: self.scheduled_at,
            status,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWeeklySlot {
    pub provider_id: Uuid,
    pub day_of_week: String,
    pub slot: NaiveTime,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDateSlot {
    pub provider_id: Uuid,
    pub date: NaiveDate,
    pub slot: NaiveTime,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDayOff {
    pub provider_id: Uuid,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
