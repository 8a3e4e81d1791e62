use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;
use crate::models::{RowId, Visit, VisitPayload};
use crate::error::ApiError;
use crate::extract::{JsonBody, PathParams};
use crate::db;

// GET /visits - List all visits
pub async fn get_visits(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Visit>>, ApiError> {
    let visits = db::get_all_visits(&pool).await?;

    Ok(Json(visits))
}

// GET /visit/:id
pub async fn get_visit_by_id(
    State(pool): State<SqlitePool>,
    PathParams(visit_id): PathParams<i64>,
) -> Result<Json<Visit>, ApiError> {
    let visit = db::get_visit_by_id(&pool, visit_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(visit))
}

// POST /visits
pub async fn create_visit(
    State(pool): State<SqlitePool>,
    JsonBody(payload): JsonBody<VisitPayload>,
) -> Result<(StatusCode, Json<RowId>), ApiError> {
    let id = db::create_visit(&pool, &payload).await?;

    Ok((StatusCode::CREATED, Json(id)))
}

// PUT /visit/:id
pub async fn update_visit(
    State(pool): State<SqlitePool>,
    PathParams(visit_id): PathParams<i64>,
    JsonBody(payload): JsonBody<VisitPayload>,
) -> Result<Json<RowId>, ApiError> {
    let id = db::update_visit(&pool, visit_id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(id))
}

// DELETE /visit/:id (also served at /visits/:id)
pub async fn delete_visit(
    State(pool): State<SqlitePool>,
    PathParams(visit_id): PathParams<i64>,
) -> Result<Json<RowId>, ApiError> {
    let id = db::delete_visit(&pool, visit_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(id))
}

// GET /pVisits/:patient - All visits of one patient
pub async fn get_patient_visits(
    State(pool): State<SqlitePool>,
    PathParams(patient): PathParams<String>,
) -> Result<Json<Vec<Visit>>, ApiError> {
    let visits = db::get_patient_visits(&pool, &patient).await?;

    // An unknown patient and a patient without visits look the same here
    if visits.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(visits))
}

// GET /pVisit/:patient/:visitDate - A patient's visit on one day
pub async fn get_patient_visit(
    State(pool): State<SqlitePool>,
    PathParams((patient, visit_date)): PathParams<(String, NaiveDate)>,
) -> Result<Json<Visit>, ApiError> {
    let visit = db::get_patient_visit_on(&pool, &patient, visit_date)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(visit))
}
