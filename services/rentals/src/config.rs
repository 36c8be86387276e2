/// Rentals service configuration loaded from environment variables.
#[derive(Debug)]
pub struct RentalsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3111). Env var: `RENTALS_PORT`.
    pub rentals_port: u16,
    /// Root directory for generated receipt files (default `media`).
    /// Env var: `MEDIA_ROOT`.
    pub media_root: String,
    /// Outbox dispatcher poll interval in seconds (default 10).
    /// Env var: `OUTBOX_POLL_SECS`.
    pub outbox_poll_secs: u64,
}

impl RentalsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            rentals_port: std::env::var("RENTALS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3111),
            media_root: std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_owned()),
            outbox_poll_secs: std::env::var("OUTBOX_POLL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
