use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::models::{Player, PlayerPayload, PlayerScore, RowId};
use crate::error::ApiError;
use crate::extract::{JsonBody, PathParams};
use crate::{db, AppState};

// GET /players - List all players
pub async fn get_players(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = db::get_all_players(&pool).await?;

    Ok(Json(players))
}

// GET /players/:id - Get player by ID
pub async fn get_player_by_id(
    State(pool): State<SqlitePool>,
    PathParams(player_id): PathParams<i64>,
) -> Result<Json<Player>, ApiError> {
    let player = db::get_player_by_id(&pool, player_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(player))
}

// GET /playerScores - Scores of every player in the scoreboard game
pub async fn get_player_scores(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerScore>>, ApiError> {
    let scores = db::get_player_scores(&state.pool, state.scores_game_id).await?;

    if scores.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(scores))
}

// POST /players - Create a player, returns its new id
pub async fn create_player(
    State(pool): State<SqlitePool>,
    JsonBody(payload): JsonBody<PlayerPayload>,
) -> Result<(StatusCode, Json<RowId>), ApiError> {
    let id = db::create_player(&pool, &payload).await?;
    tracing::debug!(player_id = id.id, "player created");

    Ok((StatusCode::CREATED, Json(id)))
}

// PUT /players/:id - Replace a player's name and email
pub async fn update_player(
    State(pool): State<SqlitePool>,
    PathParams(player_id): PathParams<i64>,
    JsonBody(payload): JsonBody<PlayerPayload>,
) -> Result<Json<RowId>, ApiError> {
    let id = db::update_player(&pool, player_id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(id))
}

// DELETE /players/:id
pub async fn delete_player(
    State(pool): State<SqlitePool>,
    PathParams(player_id): PathParams<i64>,
) -> Result<Json<RowId>, ApiError> {
    let id = db::delete_player(&pool, player_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(id))
}
