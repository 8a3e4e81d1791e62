use std::sync::LazyLock;

use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;

use crate::models::*;
use crate::sql::{Key, Statements, Table};

pub const PLAYERS: Table = Table {
    name: "Player",
    key: Key::Generated("id"),
    columns: &["name", "email"],
};

pub const GAMES: Table = Table {
    name: "Game",
    key: Key::Generated("id"),
    columns: &["name", "email"],
};

pub const PATIENTS: Table = Table {
    name: "Patient",
    key: Key::Natural("registrationNumber"),
    columns: &["name", "sex", "dob", "city", "region", "ethnicity", "lang"],
};

pub const VISITS: Table = Table {
    name: "Visit",
    key: Key::Generated("id"),
    columns: &[
        "patient",
        "visitDate",
        "doctor",
        "student",
        "primaryDiseases",
        "secondaryDiseases",
        "dischargedDate",
        "notes",
    ],
};

static PLAYER_SQL: LazyLock<Statements> = LazyLock::new(|| PLAYERS.statements());
static GAME_SQL: LazyLock<Statements> = LazyLock::new(|| GAMES.statements());
static PATIENT_SQL: LazyLock<Statements> = LazyLock::new(|| PATIENTS.statements());
static VISIT_SQL: LazyLock<Statements> = LazyLock::new(|| VISITS.statements());

static PATIENT_VISITS_SQL: LazyLock<String> =
    LazyLock::new(|| VISITS.select_where(&["patient"]));
static PATIENT_VISIT_ON_SQL: LazyLock<String> =
    LazyLock::new(|| VISITS.select_where(&["patient", "visitDate"]));

// Player queries
pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(&PLAYER_SQL.select_all)
        .fetch_all(pool)
        .await
}

pub async fn get_player_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(&PLAYER_SQL.select_by_key)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_player(pool: &SqlitePool, player: &PlayerPayload) -> Result<RowId, sqlx::Error> {
    sqlx::query_as::<_, RowId>(&PLAYER_SQL.insert)
        .bind(&player.name)
        .bind(&player.email)
        .fetch_one(pool)
        .await
}

pub async fn update_player(
    pool: &SqlitePool,
    id: i64,
    player: &PlayerPayload,
) -> Result<Option<RowId>, sqlx::Error> {
    sqlx::query_as::<_, RowId>(&PLAYER_SQL.update)
        .bind(&player.name)
        .bind(&player.email)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn delete_player(pool: &SqlitePool, id: i64) -> Result<Option<RowId>, sqlx::Error> {
    sqlx::query_as::<_, RowId>(&PLAYER_SQL.delete)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Scores of every player who took part in `game_id`
pub async fn get_player_scores(pool: &SqlitePool, game_id: i64) -> Result<Vec<PlayerScore>, sqlx::Error> {
    sqlx::query_as::<_, PlayerScore>(
        r#"SELECT Player.id, Player.name, PlayerGame.score
           FROM Player
           JOIN PlayerGame ON Player.id = PlayerGame.playerId
           JOIN Game ON PlayerGame.gameId = Game.id
           WHERE Game.id = ?"#
    )
    .bind(game_id)
    .fetch_all(pool)
    .await
}

// Game queries
pub async fn get_all_games(pool: &SqlitePool) -> Result<Vec<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(&GAME_SQL.select_all)
        .fetch_all(pool)
        .await
}

pub async fn get_game_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(&GAME_SQL.select_by_key)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_game(pool: &SqlitePool, game: &GamePayload) -> Result<RowId, sqlx::Error> {
    sqlx::query_as::<_, RowId>(&GAME_SQL.insert)
        .bind(&game.name)
        .bind(&game.email)
        .fetch_one(pool)
        .await
}

pub async fn update_game(
    pool: &SqlitePool,
    id: i64,
    game: &GamePayload,
) -> Result<Option<RowId>, sqlx::Error> {
    sqlx::query_as::<_, RowId>(&GAME_SQL.update)
        .bind(&game.name)
        .bind(&game.email)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn delete_game(pool: &SqlitePool, id: i64) -> Result<Option<RowId>, sqlx::Error> {
    sqlx::query_as::<_, RowId>(&GAME_SQL.delete)
        .bind(id)
        .fetch_optional(pool)
        .await
}

// Patient queries
pub async fn get_all_patients(pool: &SqlitePool) -> Result<Vec<Patient>, sqlx::Error> {
    sqlx::query_as::<_, Patient>(&PATIENT_SQL.select_all)
        .fetch_all(pool)
        .await
}

pub async fn get_patient(
    pool: &SqlitePool,
    registration_number: &str,
) -> Result<Option<Patient>, sqlx::Error> {
    sqlx::query_as::<_, Patient>(&PATIENT_SQL.select_by_key)
        .bind(registration_number)
        .fetch_optional(pool)
        .await
}

pub async fn create_patient(pool: &SqlitePool, patient: &PatientPayload) -> Result<PatientKey, sqlx::Error> {
    sqlx::query_as::<_, PatientKey>(&PATIENT_SQL.insert)
        .bind(&patient.registration_number)
        .bind(&patient.name)
        .bind(&patient.sex)
        .bind(patient.dob)
        .bind(&patient.city)
        .bind(&patient.region)
        .bind(&patient.ethnicity)
        .bind(&patient.lang)
        .fetch_one(pool)
        .await
}

pub async fn update_patient(
    pool: &SqlitePool,
    registration_number: &str,
    patient: &PatientPayload,
) -> Result<Option<PatientKey>, sqlx::Error> {
    sqlx::query_as::<_, PatientKey>(&PATIENT_SQL.update)
        .bind(&patient.name)
        .bind(&patient.sex)
        .bind(patient.dob)
        .bind(&patient.city)
        .bind(&patient.region)
        .bind(&patient.ethnicity)
        .bind(&patient.lang)
        .bind(registration_number)
        .fetch_optional(pool)
        .await
}

pub async fn delete_patient(
    pool: &SqlitePool,
    registration_number: &str,
) -> Result<Option<PatientKey>, sqlx::Error> {
    sqlx::query_as::<_, PatientKey>(&PATIENT_SQL.delete)
        .bind(registration_number)
        .fetch_optional(pool)
        .await
}

// Visit queries
pub async fn get_all_visits(pool: &SqlitePool) -> Result<Vec<Visit>, sqlx::Error> {
    sqlx::query_as::<_, Visit>(&VISIT_SQL.select_all)
        .fetch_all(pool)
        .await
}

pub async fn get_visit_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Visit>, sqlx::Error> {
    sqlx::query_as::<_, Visit>(&VISIT_SQL.select_by_key)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_visit(pool: &SqlitePool, visit: &VisitPayload) -> Result<RowId, sqlx::Error> {
    sqlx::query_as::<_, RowId>(&VISIT_SQL.insert)
        .bind(&visit.patient)
        .bind(visit.visit_date)
        .bind(&visit.doctor)
        .bind(&visit.student)
        .bind(&visit.primary_diseases)
        .bind(&visit.secondary_diseases)
        .bind(visit.discharged_date)
        .bind(&visit.notes)
        .fetch_one(pool)
        .await
}

pub async fn update_visit(
    pool: &SqlitePool,
    id: i64,
    visit: &VisitPayload,
) -> Result<Option<RowId>, sqlx::Error> {
    sqlx::query_as::<_, RowId>(&VISIT_SQL.update)
        .bind(&visit.patient)
        .bind(visit.visit_date)
        .bind(&visit.doctor)
        .bind(&visit.student)
        .bind(&visit.primary_diseases)
        .bind(&visit.secondary_diseases)
        .bind(visit.discharged_date)
        .bind(&visit.notes)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn delete_visit(pool: &SqlitePool, id: i64) -> Result<Option<RowId>, sqlx::Error> {
    sqlx::query_as::<_, RowId>(&VISIT_SQL.delete)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// All visits recorded for one patient
pub async fn get_patient_visits(pool: &SqlitePool, patient: &str) -> Result<Vec<Visit>, sqlx::Error> {
    sqlx::query_as::<_, Visit>(&PATIENT_VISITS_SQL)
        .bind(patient)
        .fetch_all(pool)
        .await
}

/// The visit of `patient` on `visit_date`, if any
pub async fn get_patient_visit_on(
    pool: &SqlitePool,
    patient: &str,
    visit_date: NaiveDate,
) -> Result<Option<Visit>, sqlx::Error> {
    sqlx::query_as::<_, Visit>(&PATIENT_VISIT_ON_SQL)
        .bind(patient)
        .bind(visit_date)
        .fetch_optional(pool)
        .await
}
