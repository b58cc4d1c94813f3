//! # Availability Handlers
//!
//! Handlers computing bookable appointment slots for a salon. The booking
//! client resolves a salon through the salon service and forwards its
//! `opening_time`/`closing_time` strings here, together with the date the
//! customer picked.
//!
//! ## Slot Computation
//!
//! Slot generation walks the salon's operating window in fixed 30-minute
//! steps and keeps only the starts that are still strictly in the future:
//!
//! 1. Parse the requested date and the salon's opening/closing times
//! 2. Read "now" once from the application clock
//! 3. Walk from opening to closing, one interval at a time
//! 4. Keep starts strictly later than now, formatted as `HH:MM`
//!
//! The walk lives in `saloon_core::availability` and is pure; these handlers
//! only translate between the HTTP boundary and the domain types.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use saloon_core::{
    availability,
    errors::SalonError,
    models::salon::{OperatingHours, TimeOfDay},
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the slot listing endpoint
///
/// All three values arrive as plain strings: the date from the client's date
/// picker, the times from the salon record served by the salon service.
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    /// Appointment date in `YYYY-MM-DD` form
    pub date: String,

    /// Salon opening time, `HH:MM` or `HH:MM:SS`
    pub opening: String,

    /// Salon closing time, `HH:MM` or `HH:MM:SS`
    pub closing: String,
}

/// Bookable slots for one salon and date
#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    /// The date the slots belong to
    pub date: NaiveDate,

    /// Slot start times, zero-padded `HH:MM`, ascending
    pub slots: Vec<String>,
}

/// Lists the bookable time slots for a salon on a given date
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/slots?date=2025-03-14&opening=09:00&closing=18:00
/// ```
///
/// # Returns
///
/// * `Result<Json<SlotsResponse>, AppError>` - the remaining slot starts for
///   the date, ascending; empty when the date has passed or the salon's
///   window is empty
///
/// # Errors
///
/// * `SalonError::Validation` - date not in `YYYY-MM-DD` form
/// * `SalonError::InvalidTimeOfDay` - opening or closing time out of range
///   or malformed
#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let date = parse_date(&query.date)?;
    let opening: TimeOfDay = query.opening.parse()?;
    let closing: TimeOfDay = query.closing.parse()?;

    let now = state.clock.now();
    let slots = availability::available_slots(date, OperatingHours::new(opening, closing), now);

    Ok(Json(SlotsResponse { date, slots }))
}

/// The earliest bookable date and its display form
#[derive(Debug, Serialize)]
pub struct BookingWindowResponse {
    /// Floor for the client's date picker, `YYYY-MM-DD`
    pub minimum_date: NaiveDate,

    /// Long display form of the same date, e.g. `Saturday, 15 March 2025`
    pub minimum_date_display: String,
}

/// Returns the booking window floor used to seed the client's date picker
///
/// The floor is always tomorrow relative to the server clock. Same-day slots
/// remain reachable through the slot listing endpoint; the two policies are
/// intentionally separate.
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/booking-window
/// ```
#[axum::debug_handler]
pub async fn booking_window(State(state): State<Arc<ApiState>>) -> Json<BookingWindowResponse> {
    let minimum_date = availability::minimum_bookable_date(state.clock.now());

    Json(BookingWindowResponse {
        minimum_date,
        minimum_date_display: availability::format_for_display(minimum_date),
    })
}

/// Query parameters for the same-day cutoff endpoint
#[derive(Debug, Deserialize)]
pub struct SameDayQuery {
    /// Candidate time today, `HH:MM` or `HH:MM:SS`
    pub time: String,
}

/// Same-day cutoff verdict for one candidate time
#[derive(Debug, Serialize)]
pub struct SameDayResponse {
    /// The candidate time, echoed back normalized to `HH:MM`
    pub time: TimeOfDay,

    /// Whether the time is still bookable today
    pub bookable: bool,
}

/// Checks whether a time today still satisfies the same-day booking cutoff
///
/// A same-day booking needs at least one full slot interval (30 minutes) of
/// lead time.
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/same-day?time=16:30
/// ```
///
/// # Errors
///
/// * `SalonError::InvalidTimeOfDay` - time out of range or malformed
#[axum::debug_handler]
pub async fn same_day_cutoff(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SameDayQuery>,
) -> Result<Json<SameDayResponse>, AppError> {
    let time: TimeOfDay = query.time.parse()?;
    let bookable = availability::can_book_today_after(time, state.clock.now());

    Ok(Json(SameDayResponse { time, bookable }))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError(SalonError::Validation(format!(
            "Invalid date '{raw}'. Expected YYYY-MM-DD"
        )))
    })
}
