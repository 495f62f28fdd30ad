//! # Reservation scheduler
//!
//! [`Scheduler`] is the entry point for every booking operation. It turns
//! loosely-typed requests into validated values, enforces the court lookup
//! rules and delegates the atomic conflict-checked writes to a
//! [`BookingRepository`].

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::{
    errors::{BookingError, BookingResult},
    models::{
        court::{Court, CourtRequest},
        reservation::{Reservation, ReservationInput},
    },
    repository::BookingRepository,
};

pub struct Scheduler<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> Clone for Scheduler<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: BookingRepository + ?Sized> Scheduler<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // Courts

    pub async fn list_courts(&self) -> BookingResult<Vec<Court>> {
        self.repo.list_courts().await
    }

    pub async fn get_court(&self, id: i64) -> BookingResult<Court> {
        self.repo
            .get_court(id)
            .await?
            .ok_or_else(|| court_not_found(id))
    }

    pub async fn create_court(&self, request: CourtRequest) -> BookingResult<Court> {
        let court = request.validate()?;
        let created = self.repo.create_court(&court).await?;
        info!(court_id = created.id, name = %created.name, "court created");
        Ok(created)
    }

    pub async fn update_court(&self, id: i64, request: CourtRequest) -> BookingResult<Court> {
        let court = request.validate()?;
        let updated = self.repo.update_court(id, &court).await?;
        info!(court_id = id, "court updated");
        Ok(updated)
    }

    pub async fn delete_court(&self, id: i64) -> BookingResult<()> {
        self.repo.delete_court(id).await?;
        info!(court_id = id, "court deleted");
        Ok(())
    }

    // Reservations

    pub async fn list_all(&self) -> BookingResult<Vec<Reservation>> {
        self.repo.list_reservations().await
    }

    pub async fn list_by_court(&self, court_id: i64) -> BookingResult<Vec<Reservation>> {
        self.get_court(court_id).await?;
        self.repo.list_reservations_by_court(court_id, None).await
    }

    pub async fn list_by_court_and_date(
        &self,
        court_id: i64,
        date: NaiveDate,
    ) -> BookingResult<Vec<Reservation>> {
        self.get_court(court_id).await?;
        self.repo
            .list_reservations_by_court(court_id, Some(date))
            .await
    }

    pub async fn get(&self, id: i64) -> BookingResult<Reservation> {
        self.repo
            .get_reservation(id)
            .await?
            .ok_or_else(|| reservation_not_found(id))
    }

    pub async fn create(&self, input: ReservationInput) -> BookingResult<Reservation> {
        let candidate = input.validate()?;

        let created = self
            .repo
            .insert_reservation(&candidate)
            .await
            .inspect_err(|err| log_rejection("create", candidate.court_id, err))?;

        info!(
            reservation_id = created.id,
            court_id = created.court_id,
            date = %created.date,
            start = %created.start_time,
            duration = created.duration_minutes,
            "reservation created"
        );
        Ok(created)
    }

    pub async fn modify(&self, id: i64, input: ReservationInput) -> BookingResult<Reservation> {
        let candidate = input.validate()?;

        let updated = self
            .repo
            .replace_reservation(id, &candidate)
            .await
            .inspect_err(|err| log_rejection("modify", candidate.court_id, err))?;

        info!(
            reservation_id = id,
            court_id = updated.court_id,
            date = %updated.date,
            start = %updated.start_time,
            duration = updated.duration_minutes,
            "reservation modified"
        );
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> BookingResult<()> {
        if !self.repo.delete_reservation(id).await? {
            return Err(reservation_not_found(id));
        }
        info!(reservation_id = id, "reservation deleted");
        Ok(())
    }
}

fn log_rejection(operation: &str, court_id: i64, err: &BookingError) {
    if let BookingError::Conflict(detail) = err {
        warn!(operation, court_id, %detail, "reservation rejected");
    }
}

pub fn court_not_found(id: i64) -> BookingError {
    BookingError::NotFound(format!("Court with ID {id} not found"))
}

pub fn reservation_not_found(id: i64) -> BookingError {
    BookingError::NotFound(format!("Reservation with ID {id} not found"))
}
