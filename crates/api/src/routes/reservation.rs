use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/reservaciones",
            get(handlers::reservation::list_reservations)
                .post(handlers::reservation::create_reservation),
        )
        .route(
            "/reservaciones/",
            get(handlers::reservation::list_reservations)
                .post(handlers::reservation::create_reservation),
        )
        .route(
            "/reservaciones/por_cancha_y_fecha",
            get(handlers::reservation::list_by_court_and_date),
        )
        .route(
            "/reservaciones/por_cancha_y_fecha/",
            get(handlers::reservation::list_by_court_and_date),
        )
        .route(
            "/reservaciones/:id",
            get(handlers::reservation::get_reservation)
                .put(handlers::reservation::update_reservation)
                .delete(handlers::reservation::delete_reservation),
        )
        .route("/reservas", get(handlers::reservation::list_by_court))
}
