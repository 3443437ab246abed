use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use slotbook_core::errors::BookingError;
use slotbook_core::models::{
    appointment::{
        booking_lead_time, Appointment, AppointmentStatus, CreateAppointmentRequest,
        NewAppointment,
    },
    schedule::{
        format_slot, parse_slot, parse_slots, DateSlot, DayOff, DayOfWeek,
        ReplaceWeeklySlotsRequest, WeeklySlot,
    },
};
use uuid::Uuid;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
}

fn candidate(scheduled_at: DateTime<Utc>) -> NewAppointment {
    NewAppointment {
        client_id: Uuid::new_v4(),
        provider_id: Uuid::new_v4(),
        scheduled_at,
    }
}

#[test]
fn test_appointment_serialization() {
    let appointment = Appointment {
        id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        provider_id: Uuid::new_v4(),
        scheduled_at: fixed_now() + Duration::days(1),
        status: AppointmentStatus::Pending,
        created_at: fixed_now(),
    };

    let json = to_string(&appointment).expect("Failed to serialize appointment");
    let deserialized: Appointment = from_str(&json).expect("Failed to deserialize appointment");

    assert_eq!(deserialized.id, appointment.id);
    assert_eq!(deserialized.client_id, appointment.client_id);
    assert_eq!(deserialized.provider_id, appointment.provider_id);
    assert_eq!(deserialized.scheduled_at, appointment.scheduled_at);
    assert_eq!(deserialized.status, appointment.status);
    assert_eq!(deserialized.created_at, appointment.created_at);
}

#[test]
fn test_status_serializes_lowercase() {
    assert_eq!(
        to_string(&AppointmentStatus::Pending).unwrap(),
        "\"pending\""
    );
    assert_eq!(
        from_str::<AppointmentStatus>("\"completed\"").unwrap(),
        AppointmentStatus::Completed
    );
    assert!("nonsense".parse::<AppointmentStatus>().is_err());
}

#[test]
fn test_validate_accepts_future_booking() {
    let appointment = candidate(fixed_now() + Duration::hours(2));
    assert!(appointment.validate(fixed_now()).is_ok());
}

#[test]
fn test_validate_rejects_self_booking() {
    let id = Uuid::new_v4();
    let appointment = NewAppointment {
        client_id: id,
        provider_id: id,
        scheduled_at: fixed_now() + Duration::hours(2),
    };

    let err = appointment.validate(fixed_now()).unwrap_err();
    assert!(matches!(err, BookingError::InvalidAppointment(_)));
}

#[rstest]
#[case(Duration::zero())]
#[case(Duration::seconds(-3600))]
#[case(Duration::seconds(60))]
fn test_validate_rejects_instants_inside_guard_interval(#[case] offset: Duration) {
    // Anything at or before now + lead time is too close to book.
    let appointment = candidate(fixed_now() + offset);

    let err = appointment.validate(fixed_now()).unwrap_err();
    assert!(matches!(err, BookingError::InvalidAppointment(_)));
}

#[test]
fn test_validate_accepts_instant_just_past_guard_interval() {
    let appointment = candidate(fixed_now() + booking_lead_time() + Duration::minutes(1));
    assert!(appointment.validate(fixed_now()).is_ok());
}

#[test]
fn test_validate_rejects_sub_minute_instants() {
    let appointment = candidate(fixed_now() + Duration::hours(1) + Duration::seconds(30));

    let err = appointment.validate(fixed_now()).unwrap_err();
    assert!(matches!(err, BookingError::InvalidAppointment(_)));
}

#[rstest]
#[case("monday", DayOfWeek::Monday)]
#[case("TUESDAY", DayOfWeek::Tuesday)]
#[case("Sunday", DayOfWeek::Sunday)]
fn test_day_of_week_parsing(#[case] input: &str, #[case] expected: DayOfWeek) {
    assert_eq!(input.parse::<DayOfWeek>().unwrap(), expected);
}

#[test]
fn test_day_of_week_rejects_unknown_day() {
    let err = "funday".parse::<DayOfWeek>().unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}

#[test]
fn test_day_of_week_round_trips_through_chrono() {
    let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(); // a Monday
    assert_eq!(DayOfWeek::from(date.weekday()), DayOfWeek::Monday);
    assert_eq!(DayOfWeek::Monday.as_str(), "monday");
}

#[test]
fn test_parse_slot_round_trip() {
    let parsed = parse_slot("09:30").unwrap();
    assert_eq!(format_slot(parsed), "09:30");
}

#[rstest]
#[case("9:3")]
#[case("25:00")]
#[case("10:00:00")]
#[case("not a time")]
fn test_parse_slot_rejects_malformed_input(#[case] input: &str) {
    assert!(matches!(
        parse_slot(input),
        Err(BookingError::Validation(_))
    ));
}

#[test]
fn test_parse_slots_rejects_set_on_first_bad_entry() {
    let slots = vec!["10:00".to_string(), "oops".to_string()];
    assert!(parse_slots(&slots).is_err());

    let slots = vec!["10:00".to_string(), "11:00".to_string()];
    assert_eq!(parse_slots(&slots).unwrap().len(), 2);
}

#[test]
fn test_schedule_entity_serialization() {
    let provider_id = Uuid::new_v4();
    let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
    let ten = parse_slot("10:00").unwrap();

    let weekly = WeeklySlot {
        provider_id,
        day_of_week: DayOfWeek::Monday,
        slot: ten,
    };
    let json = to_string(&weekly).expect("Failed to serialize weekly slot");
    assert!(json.contains("\"monday\""));
    let deserialized: WeeklySlot = from_str(&json).expect("Failed to deserialize weekly slot");
    assert_eq!(deserialized.day_of_week, weekly.day_of_week);
    assert_eq!(deserialized.slot, weekly.slot);

    let date_slot = DateSlot {
        provider_id,
        date,
        slot: ten,
    };
    let json = to_string(&date_slot).expect("Failed to serialize date slot");
    let deserialized: DateSlot = from_str(&json).expect("Failed to deserialize date slot");
    assert_eq!(deserialized.date, date_slot.date);
    assert_eq!(deserialized.slot, date_slot.slot);

    let day_off = DayOff { provider_id, date };
    let json = to_string(&day_off).expect("Failed to serialize day off");
    let deserialized: DayOff = from_str(&json).expect("Failed to deserialize day off");
    assert_eq!(deserialized.provider_id, day_off.provider_id);
    assert_eq!(deserialized.date, day_off.date);
}

#[test]
fn test_request_deserialization() {
    let json = r#"{"provider_id":"a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8","scheduled_at":"2025-06-09T10:00:00Z"}"#;
    let request: CreateAppointmentRequest = from_str(json).unwrap();
    assert_eq!(
        request.scheduled_at,
        Utc.with_ymd_and_hms(2025, 6, 9, 10, 0, 0).unwrap()
    );

    let json = r#"{"day_of_week":"monday","slots":["10:00","11:00"]}"#;
    let request: ReplaceWeeklySlotsRequest = from_str(json).unwrap();
    assert_eq!(request.day_of_week, "monday");
    assert_eq!(request.slots.len(), 2);
}
