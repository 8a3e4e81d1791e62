mod common;

use axum::http::StatusCode;
use common::{delete, get, post, put, test_app};
use serde_json::{json, Value};

fn maria() -> Value {
    json!({
        "registrationNumber": "R-1001",
        "name": "Maria Ochieng",
        "sex": "F",
        "dob": "1984-02-29",
        "city": "Kisumu",
        "region": "Nyanza",
        "ethnicity": "Luo",
        "lang": "Swahili"
    })
}

#[tokio::test]
async fn create_then_get_returns_submitted_fields() {
    let (app, _) = test_app().await;

    let (status, key) = post(&app, "/patients", maria()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(key, json!({"registrationNumber": "R-1001"}));

    let (status, patient) = get(&app, "/patient/R-1001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patient, maria());

    let (_, patients) = get(&app, "/patients").await;
    assert_eq!(patients, json!([maria()]));
}

#[tokio::test]
async fn update_replaces_every_field_but_the_key() {
    let (app, _) = test_app().await;
    post(&app, "/patients", maria()).await;
    post(&app, "/patients", json!({"registrationNumber": "R-1002", "name": "Juma"})).await;

    let (status, key) = put(
        &app,
        "/patient/R-1001",
        json!({"name": "Maria O.", "sex": "F", "city": "Nairobi"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(key, json!({"registrationNumber": "R-1001"}));

    let (_, patient) = get(&app, "/patient/R-1001").await;
    assert_eq!(
        patient,
        json!({
            "registrationNumber": "R-1001",
            "name": "Maria O.",
            "sex": "F",
            "dob": null,
            "city": "Nairobi",
            "region": null,
            "ethnicity": null,
            "lang": null
        })
    );

    let (_, other) = get(&app, "/patient/R-1002").await;
    assert_eq!(other["name"], "Juma");

    let (status, _) = put(&app, "/patient/R-9999", json!({"name": "Nobody"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_served_on_both_paths() {
    let (app, _) = test_app().await;
    post(&app, "/patients", maria()).await;
    post(&app, "/patients", json!({"registrationNumber": "R-1002", "name": "Juma"})).await;

    let (status, key) = delete(&app, "/patient/R-1001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(key, json!({"registrationNumber": "R-1001"}));
    let (status, _) = delete(&app, "/patient/R-1001").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(&app, "/patients/R-1002").await;
    assert_eq!(status, StatusCode::OK);
    let (_, patients) = get(&app, "/patients").await;
    assert_eq!(patients, json!([]));
}

#[tokio::test]
async fn hostile_registration_number_matches_nothing() {
    let (app, _) = test_app().await;
    post(&app, "/patients", maria()).await;

    let (status, _) = get(&app, "/patient/R-1001'%20OR%20'1'='1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(&app, "/patient/1%3BDELETE%20FROM%20Patient").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, patients) = get(&app, "/patients").await;
    assert_eq!(patients.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_registration_number_is_a_store_failure() {
    let (app, _) = test_app().await;
    post(&app, "/patients", maria()).await;

    let (status, _) = post(&app, "/patients", maria()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn empty_patients_and_unknown_registration_number() {
    let (app, _) = test_app().await;

    let (status, patients) = get(&app, "/patients").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patients, json!([]));

    let (status, body) = get(&app, "/patient/R-0000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Resource not found");

    let (status, _) = put(&app, "/patient/R-0000", json!({"name": "Nobody"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(&app, "/patient/R-0000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, patients) = get(&app, "/patients").await;
    assert_eq!(patients, json!([]));
}
