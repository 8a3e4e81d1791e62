use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

/// Game reported by `/playerScores` unless `SCORES_GAME_ID` says otherwise
pub const DEFAULT_SCORES_GAME_ID: i64 = 2;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set in .env")]
    Missing(&'static str),
    #[error("{var} is not in the correct format: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Deployment flavour; only changes how much failure detail gets logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub environment: Environment,
    /// Game whose scoreboard `/playerScores` reports
    pub scores_game_id: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Config {
            host: parse_or(&lookup, "HOST", Ipv4Addr::UNSPECIFIED)?,
            port: parse_or(&lookup, "PORT", 3000)?,
            database_url,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            environment: parse_or(&lookup, "APP_ENV", Environment::default())?,
            scores_game_id: parse_or(&lookup, "SCORES_GAME_ID", DEFAULT_SCORES_GAME_ID)?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
