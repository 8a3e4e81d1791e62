use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::models::{Patient, PatientKey, PatientPayload};
use crate::error::ApiError;
use crate::extract::{JsonBody, PathParams};
use crate::db;

// GET /patients - List all patients
pub async fn get_patients(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let patients = db::get_all_patients(&pool).await?;

    Ok(Json(patients))
}

// GET /patient/:registrationNumber
pub async fn get_patient(
    State(pool): State<SqlitePool>,
    PathParams(registration_number): PathParams<String>,
) -> Result<Json<Patient>, ApiError> {
    let patient = db::get_patient(&pool, &registration_number)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(patient))
}

// POST /patients - Registration number comes from the body
pub async fn create_patient(
    State(pool): State<SqlitePool>,
    JsonBody(payload): JsonBody<PatientPayload>,
) -> Result<(StatusCode, Json<PatientKey>), ApiError> {
    let key = db::create_patient(&pool, &payload).await?;
    tracing::debug!(registration_number = %key.registration_number, "patient registered");

    Ok((StatusCode::CREATED, Json(key)))
}

// PUT /patient/:registrationNumber - Every field but the key is replaced
pub async fn update_patient(
    State(pool): State<SqlitePool>,
    PathParams(registration_number): PathParams<String>,
    JsonBody(payload): JsonBody<PatientPayload>,
) -> Result<Json<PatientKey>, ApiError> {
    let key = db::update_patient(&pool, &registration_number, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(key))
}

// DELETE /patient/:registrationNumber (also served at /patients/:registrationNumber)
pub async fn delete_patient(
    State(pool): State<SqlitePool>,
    PathParams(registration_number): PathParams<String>,
) -> Result<Json<PatientKey>, ApiError> {
    let key = db::delete_patient(&pool, &registration_number)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(key))
}
