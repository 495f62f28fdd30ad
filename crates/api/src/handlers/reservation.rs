//! # Reservation Handlers
//!
//! HTTP entry points for the reservation lifecycle. Every handler is a thin
//! shell around [`Scheduler`](canchas_core::scheduler::Scheduler): request
//! values are passed in explicitly and the scheduler performs validation and
//! the conflict-checked write.
//!
//! Create and modify accept the loosely-typed
//! [`ReservationInput`] so that a missing or malformed field is reported as
//! a `400` with a readable `detail`, and a double booking as a `400` whose
//! `kind` is `conflict`.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;
use canchas_core::models::reservation::{
    parse_date, Reservation, ReservationInput, ReservationResponse,
};

use crate::{
    middleware::{
        error_handling::AppError,
        extract::{AppJson, AppPath, AppQuery},
    },
    ApiState,
};

/// Query parameters for listing the reservations of a court
#[derive(Debug, Deserialize)]
pub struct CourtQuery {
    pub cancha_id: i64,
}

/// Query parameters for listing the reservations of a court on one day
///
/// `fecha` is kept as text and parsed by the scheduler's date rules so that
/// a malformed date yields the same detail as in a reservation payload.
#[derive(Debug, Deserialize)]
pub struct CourtDateQuery {
    pub cancha_id: i64,
    pub fecha: String,
}

fn to_responses(reservations: Vec<Reservation>) -> Json<Vec<ReservationResponse>> {
    Json(
        reservations
            .into_iter()
            .map(ReservationResponse::from)
            .collect(),
    )
}

#[axum::debug_handler]
pub async fn list_reservations(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let reservations = state.scheduler.list_all().await?;
    Ok(to_responses(reservations))
}

/// Handles `GET /reservas?cancha_id=`
#[axum::debug_handler]
pub async fn list_by_court(
    State(state): State<Arc<ApiState>>,
    AppQuery(query): AppQuery<CourtQuery>,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let reservations = state.scheduler.list_by_court(query.cancha_id).await?;
    Ok(to_responses(reservations))
}

/// Handles `GET /reservaciones/por_cancha_y_fecha/?cancha_id=&fecha=`
#[axum::debug_handler]
pub async fn list_by_court_and_date(
    State(state): State<Arc<ApiState>>,
    AppQuery(query): AppQuery<CourtDateQuery>,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let date = parse_date(&query.fecha)?;
    let reservations = state
        .scheduler
        .list_by_court_and_date(query.cancha_id, date)
        .await?;
    Ok(to_responses(reservations))
}

#[axum::debug_handler]
pub async fn get_reservation(
    State(state): State<Arc<ApiState>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ReservationResponse>, AppError> {
    let reservation = state.scheduler.get(id).await?;
    Ok(Json(reservation.into()))
}

#[axum::debug_handler]
pub async fn create_reservation(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<ReservationInput>,
) -> Result<Json<ReservationResponse>, AppError> {
    let reservation = state.scheduler.create(payload).await?;
    Ok(Json(reservation.into()))
}

/// Replaces every field of a reservation
#[axum::debug_handler]
pub async fn update_reservation(
    State(state): State<Arc<ApiState>>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<ReservationInput>,
) -> Result<Json<ReservationResponse>, AppError> {
    let reservation = state.scheduler.modify(id, payload).await?;
    Ok(Json(reservation.into()))
}

#[axum::debug_handler]
pub async fn delete_reservation(
    State(state): State<Arc<ApiState>>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    state.scheduler.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
