use axum::http::StatusCode;
use canchas_api::middleware::error_handling::map_error;
use canchas_core::errors::BookingError;
use canchas_db::mock::repositories::MockBookingRepo;
use serde_json::{json, Value};

use crate::test_utils::{mock_server, reservation_body};

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = BookingError::NotFound("Reservation with ID 1 not found".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = BookingError::Validation("Invalid input".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_conflict() {
    let error = BookingError::Conflict("Court 1 is already booked".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = BookingError::Database(eyre::eyre!("Database error"));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = BookingError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_storage_failure_is_hidden_from_clients() {
    let mut repo = MockBookingRepo::new();
    repo.expect_list_courts()
        .returning(|| Err(BookingError::Database(eyre::eyre!("relation canchas does not exist"))));

    let server = mock_server(repo);
    let response = server.get("/canchas/").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "detail": "Internal server error", "kind": "internal" })
    );
}

#[tokio::test]
async fn test_conflict_from_storage_reaches_the_client() {
    let mut repo = MockBookingRepo::new();
    repo.expect_insert_reservation()
        .times(1)
        .returning(|_| Err(BookingError::Conflict("Court 1 is already booked".to_string())));

    let server = mock_server(repo);
    let response = server
        .post("/reservaciones/")
        .json(&reservation_body(1, "2024-06-01", "10:00", 60))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "detail": "Court 1 is already booked", "kind": "conflict" })
    );
}

#[tokio::test]
async fn test_health_and_version() {
    let server = mock_server(MockBookingRepo::new());

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<Value>(), json!({ "status": "ok" }));

    let version = server.get("/version").await.json::<Value>();
    assert_eq!(version["name"], "canchas-api");
    assert!(version["version"].is_string());
}
