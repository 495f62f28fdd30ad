use async_trait::async_trait;
use canchas_core::{
    errors::BookingResult,
    models::{
        court::{Court, NewCourt},
        reservation::{NewReservation, Reservation},
    },
    repository::BookingRepository,
};
use chrono::NaiveDate;

use crate::{
    DbPool,
    repositories::{court, reservation},
};

/// PostgreSQL-backed storage.
///
/// Reservation writes run in a transaction holding a per-court advisory
/// lock, so the overlap search and the write cannot interleave with another
/// writer on the same court.
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: DbPool,
}

impl PgBookingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn list_courts(&self) -> BookingResult<Vec<Court>> {
        court::list_courts(&self.pool).await
    }

    async fn get_court(&self, id: i64) -> BookingResult<Option<Court>> {
        court::get_court(&self.pool, id).await
    }

    async fn create_court(&self, new: &NewCourt) -> BookingResult<Court> {
        court::create_court(&self.pool, new).await
    }

    async fn update_court(&self, id: i64, new: &NewCourt) -> BookingResult<Court> {
        court::update_court(&self.pool, id, new).await
    }

    async fn delete_court(&self, id: i64) -> BookingResult<()> {
        court::delete_court(&self.pool, id).await
    }

    async fn list_reservations(&self) -> BookingResult<Vec<Reservation>> {
        reservation::list_reservations(&self.pool).await
    }

    async fn list_reservations_by_court(
        &self,
        court_id: i64,
        date: Option<NaiveDate>,
    ) -> BookingResult<Vec<Reservation>> {
        reservation::list_reservations_by_court(&self.pool, court_id, date).await
    }

    async fn get_reservation(&self, id: i64) -> BookingResult<Option<Reservation>> {
        reservation::get_reservation(&self.pool, id).await
    }

    async fn insert_reservation(&self, new: &NewReservation) -> BookingResult<Reservation> {
        reservation::insert_reservation(&self.pool, new).await
    }

    async fn replace_reservation(
        &self,
        id: i64,
        new: &NewReservation,
    ) -> BookingResult<Reservation> {
        reservation::replace_reservation(&self.pool, id, new).await
    }

    async fn delete_reservation(&self, id: i64) -> BookingResult<bool> {
        reservation::delete_reservation(&self.pool, id).await
    }
}
