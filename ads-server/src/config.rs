use std::env;

use anyhow::Context;

const SERVER_PORT_KEY: &str = "PORT";
const DB_HOST_KEY: &str = "DBHOST";
const DB_NAME_KEY: &str = "DBNAME";

const DEFAULT_SERVER_PORT: &str = "3000";
const DEFAULT_DB_HOST: &str = "mongodb://localhost:27017";
const DEFAULT_DB_NAME: &str = "advertising";

/// Process configuration, read once at startup and passed explicitly to every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_port: String,
    pub db_host: String,
    pub db_name: String,
}

impl Config {
    /// Load configuration from the environment, applying defaults for absent variables.
    pub fn from_env() -> anyhow::Result<Config> {
        Self::from_vars(
            env::var(SERVER_PORT_KEY).ok(),
            env::var(DB_HOST_KEY).ok(),
            env::var(DB_NAME_KEY).ok(),
        )
    }

    /// Pure fallback logic behind [Config::from_env]; the process environment is never
    /// written back.
    fn from_vars(
        server_port: Option<String>,
        db_host: Option<String>,
        db_name: Option<String>,
    ) -> anyhow::Result<Config> {
        let server_port = server_port.unwrap_or_else(|| DEFAULT_SERVER_PORT.to_string());

        server_port.parse::<u16>().with_context(|| {
            format!("{SERVER_PORT_KEY} must be a port number, got {server_port:?}")
        })?;

        Ok(Config {
            server_port,
            db_host: db_host.unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            db_name: db_name.unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults_apply_when_vars_absent() {
        let config = Config::from_vars(None, None, None).unwrap();

        assert_eq!(config.server_port, "3000");
        assert_eq!(config.db_host, "mongodb://localhost:27017");
        assert_eq!(config.db_name, "advertising");
    }

    #[test]
    fn test_explicit_vars_win_over_defaults() {
        let config = Config::from_vars(
            Some("8080".to_string()),
            Some("mongodb://db:27017".to_string()),
            Some("ads-test".to_string()),
        )
        .unwrap();

        assert_eq!(config.server_port, "8080");
        assert_eq!(config.db_host, "mongodb://db:27017");
        assert_eq!(config.db_name, "ads-test");
    }

    #[test]
    fn test_non_numeric_port_is_rejected() {
        assert!(Config::from_vars(Some("http".to_string()), None, None).is_err());
    }
}
