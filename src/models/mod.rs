use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Monopoly schema

/// Row from the Player table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
}

/// Row from the Game table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Game {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
}

/// A player's score in the scoreboard game (Player ⋈ PlayerGame)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerScore {
    pub id: i64,
    pub name: Option<String>,
    pub score: Option<i64>,
}

/// Body of POST /players and PUT /players/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of POST /games and PUT /games/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GamePayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Generated key echoed back by create/update/delete
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RowId {
    pub id: i64,
}

// OPUS schema

/// Row from the Patient table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Patient {
    pub registration_number: String,
    pub name: String,
    pub sex: Option<String>,
    pub dob: Option<NaiveDate>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub ethnicity: Option<String>,
    pub lang: Option<String>,
}

/// Body of POST /patients and PUT /patient/{registrationNumber}.
///
/// `registration_number` is only read on create; updates take the key from
/// the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientPayload {
    pub registration_number: Option<String>,
    pub name: Option<String>,
    pub sex: Option<String>,
    pub dob: Option<NaiveDate>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub ethnicity: Option<String>,
    pub lang: Option<String>,
}

/// Natural key echoed back by patient create/update/delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct PatientKey {
    pub registration_number: String,
}

/// Row from the Visit table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Visit {
    pub id: i64,
    pub patient: String,
    pub visit_date: NaiveDate,
    pub doctor: Option<String>,
    pub student: Option<String>,
    pub primary_diseases: Option<String>,
    pub secondary_diseases: Option<String>,
    pub discharged_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Body of POST /visits and PUT /visit/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitPayload {
    pub patient: Option<String>,
    pub visit_date: Option<NaiveDate>,
    pub doctor: Option<String>,
    pub student: Option<String>,
    pub primary_diseases: Option<String>,
    pub secondary_diseases: Option<String>,
    pub discharged_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
