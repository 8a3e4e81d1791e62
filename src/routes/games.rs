use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::models::{Game, GamePayload, RowId};
use crate::error::ApiError;
use crate::extract::{JsonBody, PathParams};
use crate::db;

// GET /games - List all games
pub async fn get_games(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let games = db::get_all_games(&pool).await?;

    Ok(Json(games))
}

// GET /games/:id - Get game by ID
pub async fn get_game_by_id(
    State(pool): State<SqlitePool>,
    PathParams(game_id): PathParams<i64>,
) -> Result<Json<Game>, ApiError> {
    let game = db::get_game_by_id(&pool, game_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(game))
}

// POST /games
pub async fn create_game(
    State(pool): State<SqlitePool>,
    JsonBody(payload): JsonBody<GamePayload>,
) -> Result<(StatusCode, Json<RowId>), ApiError> {
    let id = db::create_game(&pool, &payload).await?;

    Ok((StatusCode::CREATED, Json(id)))
}

// PUT /games/:id
pub async fn update_game(
    State(pool): State<SqlitePool>,
    PathParams(game_id): PathParams<i64>,
    JsonBody(payload): JsonBody<GamePayload>,
) -> Result<Json<RowId>, ApiError> {
    let id = db::update_game(&pool, game_id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(id))
}

// DELETE /games/:id
pub async fn delete_game(
    State(pool): State<SqlitePool>,
    PathParams(game_id): PathParams<i64>,
) -> Result<Json<RowId>, ApiError> {
    let id = db::delete_game(&pool, game_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(id))
}
