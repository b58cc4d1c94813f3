//! Appointment slot availability.
//!
//! The booking flow works in three separate rules that are deliberately not
//! merged, because the product applies them at different points:
//!
//! 1. [`available_slots`] filters individual slots to strictly-future starts.
//! 2. [`minimum_bookable_date`] floors the date picker at tomorrow.
//! 3. [`can_book_today_after`] is the same-day cutoff of one slot interval.
//!
//! All functions take `now` as an argument rather than reading a clock, so
//! identical inputs always produce identical output.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::salon::{OperatingHours, TimeOfDay};

/// Length of one bookable appointment window, in minutes.
pub const SLOT_INTERVAL_MINUTES: i64 = 30;

/// Candidate slot start times for `date`, walking from opening to closing in
/// fixed steps.
///
/// The walk stops once the cursor reaches the closing time, so the last slot
/// is emitted whenever its *start* precedes closing, even if its interval
/// would run past it. `opening >= closing` produces an empty sequence; there
/// is no 24-hour rollover.
pub fn slot_starts(
    date: NaiveDate,
    hours: OperatingHours,
) -> impl Iterator<Item = NaiveDateTime> + Clone {
    let cursor = date.and_time(hours.opening.to_naive());
    let end = date.and_time(hours.closing.to_naive());
    let step = Duration::minutes(SLOT_INTERVAL_MINUTES);

    std::iter::successors(Some(cursor), move |current| Some(*current + step))
        .take_while(move |current| *current < end)
}

/// Bookable slots for `date`: every candidate start strictly later than
/// `now`, formatted as zero-padded `HH:MM`, in ascending order.
///
/// A slot starting exactly at `now` is excluded. Dates wholly in the past
/// empty out through the same comparison; past dates are not a separate
/// branch, so "today" and "yesterday" cannot diverge in behavior.
pub fn available_slots(date: NaiveDate, hours: OperatingHours, now: NaiveDateTime) -> Vec<String> {
    slot_starts(date, hours)
        .filter(|start| *start > now)
        .map(|start| start.format("%H:%M").to_string())
        .collect()
}

/// Earliest date the booking calendar offers: the day after `now`'s date,
/// regardless of `now`'s time of day.
pub fn minimum_bookable_date(now: NaiveDateTime) -> NaiveDate {
    now.date() + Duration::days(1)
}

/// Long display form for a picked date, e.g. `Friday, 14 March 2025`.
pub fn format_for_display(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

/// Same-day cutoff: a time today is bookable only if it starts more than one
/// slot interval after `now`.
pub fn can_book_today_after(time: TimeOfDay, now: NaiveDateTime) -> bool {
    let booking = now.date().and_time(time.to_naive());
    booking > now + Duration::minutes(SLOT_INTERVAL_MINUTES)
}
