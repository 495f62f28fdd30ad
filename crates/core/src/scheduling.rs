//! # Scheduling rules
//!
//! A reservation occupies the half-open window `[start, start + duration)`.
//! Two reservations on the same court conflict when their windows overlap;
//! windows that only touch at an endpoint do not.
//!
//! Windows are compared as full date-times, so a booking that runs past
//! midnight is also checked against the next day's bookings. Storage layers
//! use [`search_dates`] to load every reservation that could possibly
//! collide with a candidate.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    errors::{BookingError, BookingResult},
    models::reservation::{NewReservation, Reservation, TIME_FORMAT},
};

pub const MIN_DURATION_MINUTES: i32 = 15;
pub const MAX_DURATION_MINUTES: i32 = 120;

/// Checks that a duration lies within the bookable range (both ends inclusive).
pub fn check_duration(minutes: i64) -> BookingResult<i32> {
    let bounds = i64::from(MIN_DURATION_MINUTES)..=i64::from(MAX_DURATION_MINUTES);
    if !bounds.contains(&minutes) {
        return Err(BookingError::Validation(format!(
            "duracion must be between {MIN_DURATION_MINUTES} and {MAX_DURATION_MINUTES} minutes, got {minutes}"
        )));
    }
    // Bounds were checked above.
    Ok(minutes as i32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(date: NaiveDate, start_time: NaiveTime, duration_minutes: i32) -> Self {
        let start = date.and_time(start_time);
        let end = start + chrono::Duration::minutes(i64::from(duration_minutes));
        Self { start, end }
    }

    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Inclusive date range that may hold reservations colliding with a booking on `date`.
///
/// Durations never exceed a day, so the neighbouring days are enough.
pub fn search_dates(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let from = date.checked_sub_days(Days::new(1)).unwrap_or(date);
    let to = date.checked_add_days(Days::new(1)).unwrap_or(date);
    (from, to)
}

/// Finds the first existing reservation that collides with `candidate`.
///
/// Reservations on other courts are ignored, as is the one with id `exclude`
/// (the reservation being modified).
pub fn find_conflict<'a, I>(
    candidate: &NewReservation,
    existing: I,
    exclude: Option<i64>,
) -> Option<&'a Reservation>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    let window = candidate.window();
    existing.into_iter().find(|other| {
        other.court_id == candidate.court_id
            && Some(other.id) != exclude
            && other.window().overlaps(&window)
    })
}

/// Error returned when `candidate` collides with `existing`.
pub fn conflict_error(existing: &Reservation) -> BookingError {
    let window = existing.window();
    BookingError::Conflict(format!(
        "Court {} is already booked on {} from {} to {}",
        existing.court_id,
        existing.date,
        window.start.format(TIME_FORMAT),
        window.end.format(TIME_FORMAT),
    ))
}

/// Orders reservations by date, then start time.
pub fn sort_by_slot(reservations: &mut [Reservation]) {
    reservations.sort_by_key(|r| (r.date, r.start_time, r.id));
}
