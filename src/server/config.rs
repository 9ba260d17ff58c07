/**
 * Server Configuration
 *
 * Loads settings from environment variables and initializes the database
 * connection pool. Unlike optional integrations, the database is required:
 * startup fails without a reachable `DATABASE_URL`. Migration failures are
 * logged but do not abort startup, since they usually mean the schema is
 * already in place.
 */

use chrono::Duration;
use sqlx::PgPool;

const DEFAULT_TOKEN_TTL_MINUTES: i64 = 20;
const DEFAULT_PORT: u16 = 8000;

/// Settings resolved from the environment.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Postgres connection string (required)
    pub database_url: String,
    /// HMAC secret for bearer tokens
    pub jwt_secret: String,
    /// Bearer token lifetime
    pub token_ttl: Duration,
    /// HTTP listen port
    pub port: u16,
}

impl Settings {
    /// Read settings from the environment.
    ///
    /// `DATABASE_URL` is required. `JWT_SECRET` falls back to a development
    /// default with a loud warning; `TOKEN_TTL_MINUTES` and `SERVER_PORT`
    /// fall back silently.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let database_url = std::env::var("DATABASE_URL")?;

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using an insecure development default");
            "change-me-in-production".to_string()
        });

        let token_ttl = std::env::var("TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .map(Duration::minutes)
            .unwrap_or_else(|| Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES));

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            database_url,
            jwt_secret,
            token_ttl,
            port,
        })
    }
}

/// Create the connection pool and run embedded migrations.
pub async fn load_database(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    tracing::info!("connecting to database...");
    let pool = PgPool::connect(&settings.database_url).await?;
    tracing::info!("database connection pool created");

    tracing::info!("running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("database migrations completed"),
        Err(e) => {
            tracing::error!("failed to run migrations: {:?}", e);
            tracing::warn!("continuing without migrations - schema may already exist");
        }
    }

    Ok(pool)
}
