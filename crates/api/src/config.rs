use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use brightclub_db::DbConfig;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} env var is not set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `10000`).
    pub port: u16,
    /// Allowed CORS origins from comma-separated `CORS_ORIGINS`.
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database pool settings.
    pub db: DbConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                         | Default      |
    /// |---------------------------------|--------------|
    /// | `DATABASE_URL`                  | *(required)* |
    /// | `DATABASE_ACCEPT_INVALID_CERTS` | `false`      |
    /// | `DATABASE_MAX_CONNECTIONS`      | `10`         |
    /// | `DATABASE_ACQUIRE_TIMEOUT_SECS` | `30`         |
    /// | `HOST`                          | `0.0.0.0`    |
    /// | `PORT`                          | `10000`      |
    /// | `CORS_ORIGINS`                  | *(any)*      |
    /// | `REQUEST_TIMEOUT_SECS`          | `30`         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let db = DbConfig {
            url,
            accept_invalid_certs: parse_bool(&lookup, "DATABASE_ACCEPT_INVALID_CERTS", false)?,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                30,
            )?),
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&lookup, "PORT", 10000)?,
            cors_origins,
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            db,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_bool<F>(lookup: &F, var: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value,
            reason: "expected true or false".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/bc")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 10000);
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.db.url, "postgres://localhost/bc");
        assert!(!config.db.accept_invalid_certs);
        assert_eq!(config.db.max_connections, 10);
        assert_eq!(config.db.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn missing_database_url_is_an_error() {
        assert_matches!(load(&[]), Err(ConfigError::Missing("DATABASE_URL")));
        assert_matches!(
            load(&[("DATABASE_URL", "")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/bc"),
            ("DATABASE_ACCEPT_INVALID_CERTS", "TRUE"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ])
        .unwrap();
        assert!(config.db.accept_invalid_certs);
        assert_eq!(config.db.max_connections, 4);
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        let origins: Vec<&str> = config
            .cors_origins
            .iter()
            .map(|o| o.to_str().unwrap())
            .collect();
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn malformed_cors_origin_is_rejected() {
        let err = load(&[
            ("DATABASE_URL", "postgres://db/bc"),
            ("CORS_ORIGINS", "http://ok.test,bad\norigin"),
        ])
        .unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "CORS_ORIGINS", .. });
    }

    #[test]
    fn malformed_port_is_rejected() {
        let err = load(&[("DATABASE_URL", "postgres://db/bc"), ("PORT", "ten")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "PORT", .. });
    }

    #[test]
    fn malformed_flag_is_rejected() {
        let err = load(&[
            ("DATABASE_URL", "postgres://db/bc"),
            ("DATABASE_ACCEPT_INVALID_CERTS", "maybe"),
        ])
        .unwrap_err();
        assert_matches!(
            err,
            ConfigError::Invalid { var: "DATABASE_ACCEPT_INVALID_CERTS", .. }
        );
    }
}
