use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use slotbook_core::models::appointment::Appointment;

pub const TOPIC_APPOINTMENT_CREATED: &str = "appointments.created";
pub const TOPIC_APPOINTMENT_CANCELED: &str = "appointments.canceled";

/// Payload announced on the bus after a booking transaction commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentEvent {
    pub appointment_id: Uuid,
    pub client_id: Uuid,
    pub provider_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub occurred_at: DateTime<Utc>,
}

impl AppointmentEvent {
    pub fn from_appointment(appointment: &Appointment, occurred_at: DateTime<Utc>) -> Self {
        Self {
            appointment_id: appointment.id,
            client_id: appointment.client_id,
            provider_id: appointment.provider_id,
            scheduled_at: appointment.scheduled_at,
            occurred_at,
        }
    }
}
