use std::collections::BTreeMap;

use async_trait::async_trait;
use canchas_core::{
    errors::{BookingError, BookingResult},
    models::{
        court::{Court, NewCourt},
        reservation::{NewReservation, Reservation},
    },
    repository::BookingRepository,
    scheduler::{court_not_found, reservation_not_found},
    scheduling::{conflict_error, find_conflict, sort_by_slot},
};
use chrono::NaiveDate;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct MemoryState {
    courts: BTreeMap<i64, Court>,
    reservations: BTreeMap<i64, Reservation>,
    last_court_id: i64,
    last_reservation_id: i64,
}

impl MemoryState {
    fn is_referenced(&self, court_id: i64) -> bool {
        self.reservations.values().any(|r| r.court_id == court_id)
    }

    fn check_writable(&self, court_id: i64) -> BookingResult<()> {
        if !self.courts.contains_key(&court_id) {
            return Err(court_not_found(court_id));
        }
        if self.is_referenced(court_id) {
            return Err(BookingError::Conflict(format!(
                "Court {court_id} has reservations and can no longer be changed"
            )));
        }
        Ok(())
    }

    fn check_bookable(&self, candidate: &NewReservation, exclude: Option<i64>) -> BookingResult<()> {
        if !self.courts.contains_key(&candidate.court_id) {
            return Err(court_not_found(candidate.court_id));
        }
        match find_conflict(candidate, self.reservations.values(), exclude) {
            Some(clash) => Err(conflict_error(clash)),
            None => Ok(()),
        }
    }
}

/// In-process storage guarded by a single lock.
///
/// Every write holds the write guard across its checks, which makes the
/// conflict search and the insert one atomic step.
#[derive(Debug, Default)]
pub struct MemoryBookingRepository {
    state: RwLock<MemoryState>,
}

impl MemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepository {
    async fn list_courts(&self) -> BookingResult<Vec<Court>> {
        let state = self.state.read().await;
        Ok(state.courts.values().cloned().collect())
    }

    async fn get_court(&self, id: i64) -> BookingResult<Option<Court>> {
        let state = self.state.read().await;
        Ok(state.courts.get(&id).cloned())
    }

    async fn create_court(&self, new: &NewCourt) -> BookingResult<Court> {
        let mut state = self.state.write().await;
        state.last_court_id += 1;
        let court = Court {
            id: state.last_court_id,
            name: new.name.clone(),
            covered: new.covered,
        };
        state.courts.insert(court.id, court.clone());
        Ok(court)
    }

    async fn update_court(&self, id: i64, new: &NewCourt) -> BookingResult<Court> {
        let mut state = self.state.write().await;
        state.check_writable(id)?;

        let court = Court {
            id,
            name: new.name.clone(),
            covered: new.covered,
        };
        state.courts.insert(id, court.clone());
        Ok(court)
    }

    async fn delete_court(&self, id: i64) -> BookingResult<()> {
        let mut state = self.state.write().await;
        state.check_writable(id)?;
        state.courts.remove(&id);
        Ok(())
    }

    async fn list_reservations(&self) -> BookingResult<Vec<Reservation>> {
        let state = self.state.read().await;
        let mut reservations: Vec<Reservation> = state.reservations.values().cloned().collect();
        reservations.sort_by_key(|r| (r.court_id, r.date, r.start_time, r.id));
        Ok(reservations)
    }

    async fn list_reservations_by_court(
        &self,
        court_id: i64,
        date: Option<NaiveDate>,
    ) -> BookingResult<Vec<Reservation>> {
        let state = self.state.read().await;
        let mut reservations: Vec<Reservation> = state
            .reservations
            .values()
            .filter(|r| r.court_id == court_id)
            .filter(|r| date.is_none_or(|d| r.date == d))
            .cloned()
            .collect();
        sort_by_slot(&mut reservations);
        Ok(reservations)
    }

    async fn get_reservation(&self, id: i64) -> BookingResult<Option<Reservation>> {
        let state = self.state.read().await;
        Ok(state.reservations.get(&id).cloned())
    }

    async fn insert_reservation(&self, new: &NewReservation) -> BookingResult<Reservation> {
        let mut state = self.state.write().await;
        state.check_bookable(new, None)?;

        state.last_reservation_id += 1;
        let reservation = Reservation::from_new(state.last_reservation_id, new.clone());
        state.reservations.insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    async fn replace_reservation(
        &self,
        id: i64,
        new: &NewReservation,
    ) -> BookingResult<Reservation> {
        let mut state = self.state.write().await;
        if !state.reservations.contains_key(&id) {
            return Err(reservation_not_found(id));
        }
        state.check_bookable(new, Some(id))?;

        let reservation = Reservation::from_new(id, new.clone());
        state.reservations.insert(id, reservation.clone());
        Ok(reservation)
    }

    async fn delete_reservation(&self, id: i64) -> BookingResult<bool> {
        let mut state = self.state.write().await;
        Ok(state.reservations.remove(&id).is_some())
    }
}
