use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{create_court, memory_server, reservation_body};

#[tokio::test]
async fn test_create_and_list_courts() {
    let server = memory_server();

    let response = server
        .post("/canchas/")
        .json(&json!({ "nombre": "Cancha Techada", "techada": true }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": 1, "nombre": "Cancha Techada", "techada": true })
    );

    create_court(&server, "Cancha Abierta").await;

    let listed = server.get("/canchas/").await.json::<Value>();
    assert_eq!(listed.as_array().map(Vec::len), Some(2));
    assert_eq!(listed[1]["nombre"], "Cancha Abierta");
    assert_eq!(listed[1]["techada"], false);
}

#[tokio::test]
async fn test_paths_without_trailing_slash() {
    let server = memory_server();

    server
        .post("/canchas")
        .json(&json!({ "nombre": "Norte" }))
        .await
        .assert_status_ok();

    let listed = server.get("/canchas").await.json::<Value>();
    assert_eq!(listed[0]["nombre"], "Norte");
}

#[tokio::test]
async fn test_get_court() {
    let server = memory_server();
    let id = create_court(&server, "Central").await;

    let response = server.get(&format!("/canchas/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["nombre"], "Central");
}

#[tokio::test]
async fn test_get_unknown_court() {
    let server = memory_server();

    let response = server.get("/canchas/99").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "detail": "Court with ID 99 not found", "kind": "not_found" })
    );
}

#[tokio::test]
async fn test_create_court_without_name() {
    let server = memory_server();

    let response = server.post("/canchas/").json(&json!({ "techada": true })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}

#[tokio::test]
async fn test_update_and_delete_court() {
    let server = memory_server();
    let id = create_court(&server, "Vieja").await;

    let response = server
        .put(&format!("/canchas/{id}"))
        .json(&json!({ "nombre": "Nueva", "techada": true }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["nombre"], "Nueva");

    server
        .delete(&format!("/canchas/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/canchas/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_referenced_court_cannot_be_deleted() {
    let server = memory_server();
    let id = create_court(&server, "Ocupada").await;
    server
        .post("/reservaciones/")
        .json(&reservation_body(id, "2024-06-01", "10:00", 60))
        .await
        .assert_status_ok();

    let response = server.delete(&format!("/canchas/{id}")).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "conflict");
}

#[tokio::test]
async fn test_court_reservations_route() {
    let server = memory_server();
    let id = create_court(&server, "Cancha 1").await;
    for hora in ["12:00", "09:00"] {
        server
            .post("/reservaciones/")
            .json(&reservation_body(id, "2024-06-01", hora, 60))
            .await
            .assert_status_ok();
    }

    let listed = server.get(&format!("/canchas/{id}/reservas")).await.json::<Value>();

    assert_eq!(listed[0]["hora_inicio"], "09:00");
    assert_eq!(listed[1]["hora_inicio"], "12:00");
}

#[tokio::test]
async fn test_court_reservations_of_unknown_court() {
    let server = memory_server();

    server
        .get("/canchas/5/reservas")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_court_id() {
    let server = memory_server();

    let response = server.get("/canchas/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}
