use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::{create_court, memory_server, reservation_body};

#[tokio::test]
async fn test_create_reservation() {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;

    let response = server
        .post("/reservaciones/")
        .json(&reservation_body(court, "2024-06-01", "10:00", 60))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "id": 1,
            "cancha_id": court,
            "fecha": "2024-06-01",
            "hora_inicio": "10:00",
            "duracion": 60,
            "nombre_contacto": "Carla Gómez",
            "telefono_area": "351",
            "telefono_numero": "4567890",
            "telefono_contacto": "351-4567890"
        })
    );
}

#[tokio::test]
async fn test_create_then_get() {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;

    let created = server
        .post("/reservaciones/")
        .json(&reservation_body(court, "2024-06-01", "10:00", 60))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let fetched = server.get(&format!("/reservaciones/{id}")).await;

    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), created);
}

#[tokio::test]
async fn test_touching_reservation_is_accepted() {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;
    server
        .post("/reservaciones/")
        .json(&reservation_body(court, "2024-06-01", "10:00", 60))
        .await
        .assert_status_ok();

    server
        .post("/reservaciones/")
        .json(&reservation_body(court, "2024-06-01", "11:00", 30))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_overlapping_reservation_is_a_conflict() {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;
    server
        .post("/reservaciones/")
        .json(&reservation_body(court, "2024-06-01", "10:00", 60))
        .await
        .assert_status_ok();

    let response = server
        .post("/reservaciones/")
        .json(&reservation_body(court, "2024-06-01", "10:30", 30))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "conflict");
    assert_eq!(
        body["detail"],
        format!("Court {court} is already booked on 2024-06-01 from 10:00 to 11:00")
    );
}

#[rstest]
#[case(10, StatusCode::BAD_REQUEST)]
#[case(15, StatusCode::OK)]
#[case(120, StatusCode::OK)]
#[case(150, StatusCode::BAD_REQUEST)]
#[tokio::test]
async fn test_duration_bounds(#[case] duracion: i64, #[case] expected: StatusCode) {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;

    let response = server
        .post("/reservaciones/")
        .json(&reservation_body(court, "2024-06-01", "10:00", duracion))
        .await;

    response.assert_status(expected);
}

#[tokio::test]
async fn test_missing_field_detail() {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;
    let mut body = reservation_body(court, "2024-06-01", "10:00", 60);
    body.as_object_mut().unwrap().remove("fecha");

    let response = server.post("/reservaciones/").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "detail": "fecha is required", "kind": "validation" })
    );
}

#[tokio::test]
async fn test_malformed_json_is_a_validation_error() {
    let server = memory_server();

    let response = server
        .post("/reservaciones/")
        .bytes("{\"cancha_id\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}

#[tokio::test]
async fn test_unknown_court_is_not_found() {
    let server = memory_server();

    let response = server
        .post("/reservaciones/")
        .json(&reservation_body(8, "2024-06-01", "10:00", 60))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_combined_phone_from_legacy_clients() {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;

    let response = server
        .post("/reservaciones/")
        .json(&json!({
            "cancha_id": court.to_string(),
            "fecha": "2024-06-01",
            "hora_inicio": "10:00",
            "duracion": "45",
            "nombre_contacto": "Pablo",
            "telefono_contacto": "0351 4567890"
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["telefono_area"], "0351");
    assert_eq!(body["telefono_numero"], "4567890");
    assert_eq!(body["duracion"], 45);
}

#[tokio::test]
async fn test_modify_reservation() {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;
    let other = create_court(&server, "Cancha 2").await;
    let id = server
        .post("/reservaciones/")
        .json(&reservation_body(court, "2024-06-01", "10:00", 60))
        .await
        .json::<Value>()["id"]
        .as_i64()
        .unwrap();

    let response = server
        .put(&format!("/reservaciones/{id}"))
        .json(&reservation_body(other, "2024-06-02", "20:00", 90))
        .await;
    response.assert_status_ok();

    let fetched = server.get(&format!("/reservaciones/{id}")).await.json::<Value>();
    assert_eq!(fetched["cancha_id"], other);
    assert_eq!(fetched["fecha"], "2024-06-02");
    assert_eq!(fetched["hora_inicio"], "20:00");
    assert_eq!(fetched["duracion"], 90);
}

#[tokio::test]
async fn test_modify_onto_a_booked_window() {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;
    server
        .post("/reservaciones/")
        .json(&reservation_body(court, "2024-06-01", "10:00", 60))
        .await
        .assert_status_ok();
    let id = server
        .post("/reservaciones/")
        .json(&reservation_body(court, "2024-06-01", "15:00", 60))
        .await
        .json::<Value>()["id"]
        .as_i64()
        .unwrap();

    let response = server
        .put(&format!("/reservaciones/{id}"))
        .json(&reservation_body(court, "2024-06-01", "09:30", 60))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "conflict");
}

#[tokio::test]
async fn test_modify_unknown_reservation() {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;

    server
        .put("/reservaciones/77")
        .json(&reservation_body(court, "2024-06-01", "10:00", 60))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_reservation() {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;
    let id = server
        .post("/reservaciones/")
        .json(&reservation_body(court, "2024-06-01", "10:00", 60))
        .await
        .json::<Value>()["id"]
        .as_i64()
        .unwrap();

    server
        .delete(&format!("/reservaciones/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/reservaciones/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&format!("/reservaciones/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_by_court_and_date() {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;
    for (fecha, hora) in [("2024-06-01", "18:00"), ("2024-06-02", "10:00"), ("2024-06-01", "09:00")] {
        server
            .post("/reservaciones/")
            .json(&reservation_body(court, fecha, hora, 60))
            .await
            .assert_status_ok();
    }

    let response = server
        .get("/reservaciones/por_cancha_y_fecha/")
        .add_query_param("cancha_id", court)
        .add_query_param("fecha", "2024-06-01")
        .await;

    response.assert_status_ok();
    let horas: Vec<Value> = response
        .json::<Vec<Value>>()
        .into_iter()
        .map(|r| r["hora_inicio"].clone())
        .collect();
    assert_eq!(horas, vec![json!("09:00"), json!("18:00")]);
}

#[tokio::test]
async fn test_list_by_court_and_date_with_bad_date() {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;

    let response = server
        .get("/reservaciones/por_cancha_y_fecha/")
        .add_query_param("cancha_id", court)
        .add_query_param("fecha", "mañana")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}

#[tokio::test]
async fn test_list_by_court_and_date_requires_court() {
    let server = memory_server();

    let response = server
        .get("/reservaciones/por_cancha_y_fecha/")
        .add_query_param("fecha", "2024-06-01")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_by_court_query_route() {
    let server = memory_server();
    let court = create_court(&server, "Cancha 1").await;
    server
        .post("/reservaciones/")
        .json(&reservation_body(court, "2024-06-01", "10:00", 60))
        .await
        .assert_status_ok();

    let response = server.get("/reservas").add_query_param("cancha_id", court).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 1);

    server
        .get("/reservas")
        .add_query_param("cancha_id", 404)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_all_reservations() {
    let server = memory_server();
    let first = create_court(&server, "Cancha 1").await;
    let second = create_court(&server, "Cancha 2").await;
    for court in [second, first] {
        server
            .post("/reservaciones")
            .json(&reservation_body(court, "2024-06-01", "10:00", 60))
            .await
            .assert_status_ok();
    }

    let listed = server.get("/reservaciones/").await.json::<Vec<Value>>();

    let courts: Vec<Value> = listed.iter().map(|r| r["cancha_id"].clone()).collect();
    assert_eq!(courts, vec![json!(first), json!(second)]);
}
