use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/canchas",
            get(handlers::court::list_courts).post(handlers::court::create_court),
        )
        .route(
            "/canchas/",
            get(handlers::court::list_courts).post(handlers::court::create_court),
        )
        .route(
            "/canchas/:id",
            get(handlers::court::get_court)
                .put(handlers::court::update_court)
                .delete(handlers::court::delete_court),
        )
        .route(
            "/canchas/:id/reservas",
            get(handlers::court::list_court_reservations),
        )
}
