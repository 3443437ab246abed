use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/schedule/day-off", post(handlers::schedule::set_day_off))
        .route(
            "/api/schedule/weekly-slots",
            put(handlers::schedule::replace_weekly_slots),
        )
        .route(
            "/api/schedule/date-slots",
            put(handlers::schedule::replace_date_slots),
        )
        .route(
            "/api/schedule/date-slots/:date",
            delete(handlers::schedule::clear_date_slots),
        )
        .route(
            "/api/schedule/:date",
            get(handlers::schedule::get_day_schedule),
        )
}
