use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub type DbPool = sqlx::PgPool;

/// Connection settings for the Postgres pool.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Postgres connection string.
    pub url: String,
    /// Accept self-signed or otherwise unverifiable server certificates.
    ///
    /// Some hosted Postgres providers present certificates that do not chain
    /// to a public root. When set, the connection is still encrypted but the
    /// certificate and hostname are not checked. When unset, any TLS mode in
    /// the URL that would skip verification is raised to `verify-full`; only
    /// an explicit `sslmode=disable` or `sslmode=verify-ca` is kept.
    pub accept_invalid_certs: bool,
    /// Upper bound on simultaneous connections (and so on in-flight queries).
    pub max_connections: u32,
    /// How long a request waits for a free connection before failing.
    pub acquire_timeout: Duration,
}

/// Create a connection pool from the given settings.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = connect_options(config)?;

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
}

/// Parse the connection string and settle the TLS mode.
pub fn connect_options(config: &DbConfig) -> Result<PgConnectOptions, sqlx::Error> {
    let options = PgConnectOptions::from_str(&config.url)?;

    let mode = if config.accept_invalid_certs {
        tracing::warn!(
            "DATABASE_ACCEPT_INVALID_CERTS is enabled: database TLS certificates will not be verified"
        );
        // `require` encrypts without verifying the certificate chain.
        PgSslMode::Require
    } else {
        // sqlx skips certificate checks for allow/prefer/require.
        match options.get_ssl_mode() {
            PgSslMode::Disable => PgSslMode::Disable,
            PgSslMode::VerifyCa => PgSslMode::VerifyCa,
            PgSslMode::Allow | PgSslMode::Prefer | PgSslMode::Require | PgSslMode::VerifyFull => {
                PgSslMode::VerifyFull
            }
        }
    };

    Ok(options.ssl_mode(mode))
}

/// Check that the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
