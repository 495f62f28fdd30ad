use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use canchas_core::models::{
    court::{Court, CourtRequest},
    reservation::ReservationResponse,
};

use crate::{
    middleware::{
        error_handling::AppError,
        extract::{AppJson, AppPath},
    },
    ApiState,
};

#[axum::debug_handler]
pub async fn list_courts(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Court>>, AppError> {
    let courts = state.scheduler.list_courts().await?;
    Ok(Json(courts))
}

#[axum::debug_handler]
pub async fn get_court(
    State(state): State<Arc<ApiState>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Court>, AppError> {
    let court = state.scheduler.get_court(id).await?;
    Ok(Json(court))
}

#[axum::debug_handler]
pub async fn create_court(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<CourtRequest>,
) -> Result<Json<Court>, AppError> {
    let court = state.scheduler.create_court(payload).await?;
    Ok(Json(court))
}

#[axum::debug_handler]
pub async fn update_court(
    State(state): State<Arc<ApiState>>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<CourtRequest>,
) -> Result<Json<Court>, AppError> {
    let court = state.scheduler.update_court(id, payload).await?;
    Ok(Json(court))
}

#[axum::debug_handler]
pub async fn delete_court(
    State(state): State<Arc<ApiState>>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    state.scheduler.delete_court(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reservations of one court, ordered by date and start time
#[axum::debug_handler]
pub async fn list_court_reservations(
    State(state): State<Arc<ApiState>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let reservations = state.scheduler.list_by_court(id).await?;
    Ok(Json(
        reservations
            .into_iter()
            .map(ReservationResponse::from)
            .collect(),
    ))
}
