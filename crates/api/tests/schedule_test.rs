use chrono::NaiveTime;
use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use slotbook_api::middleware::error_handling::AppError;
use slotbook_core::errors::BookingError;
use slotbook_core::models::schedule::{
    parse_slots, DayOfWeek, ReplaceWeeklySlotsRequest,
};
use slotbook_db::mock::repositories::MockScheduleRepo;

mod test_utils;
use test_utils::TestContext;

// Wrapper mirroring the replace_weekly_slots handler: validation happens
// before the repository (and therefore the transaction) is touched.
async fn replace_weekly_with(
    repo: &MockScheduleRepo,
    provider_id: Uuid,
    payload: ReplaceWeeklySlotsRequest,
) -> Result<(), AppError> {
    let day_of_week: DayOfWeek = payload.day_of_week.parse()?;
    let slots = parse_slots(&payload.slots)?;

    repo.replace_weekly_slots(provider_id, day_of_week, slots)
        .await
        .map_err(BookingError::Database)?;

    Ok(())
}

async fn clear_date_slots_with(
    repo: &MockScheduleRepo,
    provider_id: Uuid,
    date: chrono::NaiveDate,
) -> Result<(), AppError> {
    let removed = repo
        .clear_date_slots(provider_id, date)
        .await
        .map_err(BookingError::Database)?;

    if removed == 0 {
        return Err(AppError(BookingError::NotFound(format!(
            "no date slots for {date}"
        ))));
    }

    Ok(())
}

#[tokio::test]
async fn test_replace_weekly_slots_rejects_unknown_weekday() {
    let mut ctx = TestContext::new();
    ctx.schedule_repo.expect_replace_weekly_slots().times(0);

    let payload = ReplaceWeeklySlotsRequest {
        day_of_week: "funday".to_string(),
        slots: vec!["10:00".to_string()],
    };

    let result = replace_weekly_with(&ctx.schedule_repo, Uuid::new_v4(), payload).await;

    let err = result.unwrap_err();
    assert!(matches!(err.0, BookingError::Validation(_)));
}

#[tokio::test]
async fn test_replace_weekly_slots_rejects_malformed_slot() {
    let mut ctx = TestContext::new();
    ctx.schedule_repo.expect_replace_weekly_slots().times(0);

    let payload = ReplaceWeeklySlotsRequest {
        day_of_week: "monday".to_string(),
        slots: vec!["10:00".to_string(), "25:99".to_string()],
    };

    let result = replace_weekly_with(&ctx.schedule_repo, Uuid::new_v4(), payload).await;

    let err = result.unwrap_err();
    assert!(matches!(err.0, BookingError::Validation(_)));
}

#[test_log::test(tokio::test)]
async fn test_replace_weekly_slots_passes_parsed_values_through() {
    let mut ctx = TestContext::new();
    let provider_id = Uuid::new_v4();

    let expected = vec![
        NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
    ];

    ctx.schedule_repo
        .expect_replace_weekly_slots()
        .with(
            predicate::eq(provider_id),
            predicate::eq(DayOfWeek::Monday),
            predicate::eq(expected),
        )
        .times(1)
        .returning(|_, _, _| Ok(()));

    let payload = ReplaceWeeklySlotsRequest {
        day_of_week: "Monday".to_string(),
        slots: vec!["10:00".to_string(), "11:30".to_string()],
    };

    let result = replace_weekly_with(&ctx.schedule_repo, provider_id, payload).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_replace_weekly_slots_accepts_an_empty_set() {
    // Replacing with nothing clears the weekday, which is a legal template.
    let mut ctx = TestContext::new();

    ctx.schedule_repo
        .expect_replace_weekly_slots()
        .times(1)
        .returning(|_, _, _| Ok(()));

    let payload = ReplaceWeeklySlotsRequest {
        day_of_week: "friday".to_string(),
        slots: vec![],
    };

    let result = replace_weekly_with(&ctx.schedule_repo, Uuid::new_v4(), payload).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_clear_date_slots_without_override_is_not_found() {
    let mut ctx = TestContext::new();

    ctx.schedule_repo
        .expect_clear_date_slots()
        .times(1)
        .returning(|_, _| Ok(0));

    let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
    let result = clear_date_slots_with(&ctx.schedule_repo, Uuid::new_v4(), date).await;

    let err = result.unwrap_err();
    assert!(matches!(err.0, BookingError::NotFound(_)));
}

#[tokio::test]
async fn test_clear_date_slots_reports_removed_rows() {
    let mut ctx = TestContext::new();

    ctx.schedule_repo
        .expect_clear_date_slots()
        .times(1)
        .returning(|_, _| Ok(3));

    let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
    let result = clear_date_slots_with(&ctx.schedule_repo, Uuid::new_v4(), date).await;

    assert!(result.is_ok());
}

#[test]
fn test_parse_slots_preserves_order() {
    let slots = vec!["09:00".to_string(), "13:30".to_string(), "10:15".to_string()];
    let parsed = parse_slots(&slots).unwrap();

    assert_eq!(
        parsed,
        vec![
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(13, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 15, 0).unwrap(),
        ]
    );
}
