//! HTTP front for the Monopoly and OPUS schemas.
//!
//! Each route maps onto exactly one parameterized statement in [`db`]; all
//! failures funnel through [`error::ApiError`].

use axum::{
    extract::FromRef,
    middleware,
    routing::{delete, get},
    Router,
};
use sqlx::sqlite::SqlitePool;

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod sql;

use crate::config::{Config, Environment, DEFAULT_SCORES_GAME_ID};

/// Everything a handler may need, built once at startup and injected via
/// `with_state`.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub environment: Environment,
    pub scores_game_id: i64,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            environment: Environment::default(),
            scores_game_id: DEFAULT_SCORES_GAME_ID,
        }
    }

    pub fn from_config(pool: SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            environment: config.environment,
            scores_game_id: config.scores_game_id,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Root and health
        .route("/", get(|| async { "Hello, Monopoly and OPUS service!" }))
        .route("/health", get(routes::health::health_check))

        // Monopoly: players
        .route(
            "/players",
            get(routes::players::get_players).post(routes::players::create_player),
        )
        .route(
            "/players/{id}",
            get(routes::players::get_player_by_id)
                .put(routes::players::update_player)
                .delete(routes::players::delete_player),
        )
        .route("/playerScores", get(routes::players::get_player_scores))

        // Monopoly: games
        .route(
            "/games",
            get(routes::games::get_games).post(routes::games::create_game),
        )
        .route(
            "/games/{id}",
            get(routes::games::get_game_by_id)
                .put(routes::games::update_game)
                .delete(routes::games::delete_game),
        )

        // OPUS: patients
        .route(
            "/patients",
            get(routes::patients::get_patients).post(routes::patients::create_patient),
        )
        .route(
            "/patient/{registration_number}",
            get(routes::patients::get_patient)
                .put(routes::patients::update_patient)
                .delete(routes::patients::delete_patient),
        )
        .route(
            "/patients/{registration_number}",
            delete(routes::patients::delete_patient),
        )

        // OPUS: visits
        .route(
            "/visits",
            get(routes::visits::get_visits).post(routes::visits::create_visit),
        )
        .route(
            "/visit/{id}",
            get(routes::visits::get_visit_by_id)
                .put(routes::visits::update_visit)
                .delete(routes::visits::delete_visit),
        )
        .route("/visits/{id}", delete(routes::visits::delete_visit))
        .route("/pVisits/{patient}", get(routes::visits::get_patient_visits))
        .route(
            "/pVisit/{patient}/{visit_date}",
            get(routes::visits::get_patient_visit),
        )

        .layer(middleware::from_fn_with_state(
            state.clone(),
            error::report_failures,
        ))
        .with_state(state)
}
