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
use mockall::mock;

// Mock repository for testing
mock! {
    pub BookingRepo {}

    #[async_trait]
    impl BookingRepository for BookingRepo {
        async fn list_courts(&self) -> BookingResult<Vec<Court>>;

        async fn get_court(&self, id: i64) -> BookingResult<Option<Court>>;

        async fn create_court(&self, court: &NewCourt) -> BookingResult<Court>;

        async fn update_court(&self, id: i64, court: &NewCourt) -> BookingResult<Court>;

        async fn delete_court(&self, id: i64) -> BookingResult<()>;

        async fn list_reservations(&self) -> BookingResult<Vec<Reservation>>;

        async fn list_reservations_by_court(
            &self,
            court_id: i64,
            date: Option<NaiveDate>,
        ) -> BookingResult<Vec<Reservation>>;

        async fn get_reservation(&self, id: i64) -> BookingResult<Option<Reservation>>;

        async fn insert_reservation(
            &self,
            reservation: &NewReservation,
        ) -> BookingResult<Reservation>;

        async fn replace_reservation(
            &self,
            id: i64,
            reservation: &NewReservation,
        ) -> BookingResult<Reservation>;

        async fn delete_reservation(&self, id: i64) -> BookingResult<bool>;
    }
}
