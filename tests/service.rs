mod common;

use axum::http::StatusCode;
use common::{get, post, send, test_app, test_pool};
use monopoly_opus_service::{
    app,
    config::{Environment, DEFAULT_SCORES_GAME_ID},
    AppState,
};
use serde_json::json;

#[tokio::test]
async fn root_and_health_respond() {
    let (app, _) = test_app().await;

    let (status, _) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);

    let (status, health) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");
    assert_eq!(health["database"], "up");
    assert!(health["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn unregistered_routes_fall_through_to_404() {
    let (app, _) = test_app().await;

    let (status, _) = get(&app, "/scores").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PATCH", "/players/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn production_hides_store_errors_the_same_way() {
    let pool = test_pool().await;
    sqlx::query("DROP TABLE Visit").execute(&pool).await.unwrap();

    let state = AppState {
        environment: Environment::Production,
        ..AppState::new(pool)
    };
    let app = app(state);

    let (status, body) = get(&app, "/visits").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
    assert!(!body.to_string().contains("Visit"));
}

#[tokio::test]
async fn rejected_input_uses_the_error_body() {
    let (app, _) = test_app().await;

    let (status, body) = get(&app, "/players/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "400 Bad Request");
    assert!(body["message"].is_string());

    let (status, body) = post(&app, "/players", json!({"name": 5, "email": "a@x.com"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "422 Unprocessable Entity");

    let (status, body) = send(&app, "POST", "/players", None).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error"], "415 Unsupported Media Type");

    let (_, players) = get(&app, "/players").await;
    assert_eq!(players, json!([]));
}

#[tokio::test]
async fn default_state_and_config_agree_on_scores_game() {
    let state = AppState::new(test_pool().await);
    assert_eq!(state.scores_game_id, DEFAULT_SCORES_GAME_ID);
}
