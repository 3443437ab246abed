use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::DbAppointment;
use slotbook_core::availability::DaySchedule;
use slotbook_core::errors::BookingResult;
use slotbook_core::models::appointment::AppointmentStatus;
use slotbook_core::models::schedule::DayOfWeek;

// Mock repositories for testing
mock! {
    pub ScheduleRepo {
        pub async fn set_day_off(
            &self,
            provider_id: Uuid,
            date: NaiveDate,
            is_day_off: bool,
        ) -> eyre::Result<()>;

        pub async fn replace_weekly_slots(
            &self,
            provider_id: Uuid,
            day_of_week: DayOfWeek,
            slots: Vec<NaiveTime>,
        ) -> eyre::Result<()>;

        pub async fn replace_date_slots(
            &self,
            provider_id: Uuid,
            date: NaiveDate,
            slots: Vec<NaiveTime>,
        ) -> eyre::Result<()>;

        pub async fn clear_date_slots(
            &self,
            provider_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<u64>;

        pub async fn days_off(
            &self,
            provider_id: Uuid,
        ) -> eyre::Result<Vec<NaiveDate>>;
    }
}

mock! {
    pub AvailabilityRepo {
        pub async fn day_schedule(
            &self,
            provider_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<DaySchedule>;

        pub async fn is_available(
            &self,
            provider_id: Uuid,
            at: DateTime<Utc>,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub AppointmentRepo {
        pub async fn create_appointment(
            &self,
            client_id: Uuid,
            provider_id: Uuid,
            scheduled_at: DateTime<Utc>,
            status: AppointmentStatus,
        ) -> BookingResult<DbAppointment>;

        pub async fn get_appointment_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn delete_appointment(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;

        pub async fn get_appointments_by_client_id(
            &self,
            client_id: Uuid,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn get_appointments_by_provider_and_date(
            &self,
            provider_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbAppointment>>;
    }
}
