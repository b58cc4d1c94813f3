use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/availability/slots",
            get(handlers::availability::list_slots),
        )
        .route(
            "/api/availability/booking-window",
            get(handlers::availability::booking_window),
        )
        .route(
            "/api/availability/same-day",
            get(handlers::availability::same_day_cutoff),
        )
}
