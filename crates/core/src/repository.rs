use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    errors::BookingResult,
    models::{
        court::{Court, NewCourt},
        reservation::{NewReservation, Reservation},
    },
};

/// Storage seam for courts and reservations.
///
/// `insert_reservation` and `replace_reservation` must look up the court,
/// search for conflicts and write as one atomic unit: two concurrent
/// requests for overlapping windows on the same court can never both
/// succeed. Conflicts are reported with
/// [`conflict_error`](crate::scheduling::conflict_error).
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// All courts ordered by id.
    async fn list_courts(&self) -> BookingResult<Vec<Court>>;

    async fn get_court(&self, id: i64) -> BookingResult<Option<Court>>;

    async fn create_court(&self, court: &NewCourt) -> BookingResult<Court>;

    /// Fails with `NotFound` for an unknown court and `Conflict` while
    /// reservations reference it.
    async fn update_court(&self, id: i64, court: &NewCourt) -> BookingResult<Court>;

    /// Same failure modes as [`update_court`](Self::update_court).
    async fn delete_court(&self, id: i64) -> BookingResult<()>;

    /// All reservations ordered by court, date and start time.
    async fn list_reservations(&self) -> BookingResult<Vec<Reservation>>;

    /// Reservations of one court, optionally restricted to a single date,
    /// ordered by date and start time.
    async fn list_reservations_by_court(
        &self,
        court_id: i64,
        date: Option<NaiveDate>,
    ) -> BookingResult<Vec<Reservation>>;

    async fn get_reservation(&self, id: i64) -> BookingResult<Option<Reservation>>;

    /// Stores a new reservation unless it collides with an existing one.
    async fn insert_reservation(&self, reservation: &NewReservation) -> BookingResult<Reservation>;

    /// Replaces every field of reservation `id`, checking conflicts against
    /// the new court and date while ignoring the reservation itself.
    async fn replace_reservation(
        &self,
        id: i64,
        reservation: &NewReservation,
    ) -> BookingResult<Reservation>;

    /// Returns `false` when no reservation with that id existed.
    async fn delete_reservation(&self, id: i64) -> BookingResult<bool>;
}
