/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Fixed interval between stream observations in milliseconds (default: `1000`).
    pub stream_interval_ms: u64,
    /// Capacity of the bounded observation writer queue (default: `256`).
    pub store_queue_capacity: usize,
    /// How long observations are retained before cleanup (default: `24` hours).
    pub observation_retention_hours: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                    |
    /// |-------------------------------|----------------------------|
    /// | `HOST`                        | `0.0.0.0`                  |
    /// | `PORT`                        | `8000`                     |
    /// | `CORS_ORIGINS`                | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                       |
    /// | `STREAM_INTERVAL_MS`          | `1000`                     |
    /// | `STORE_QUEUE_CAPACITY`        | `256`                      |
    /// | `OBSERVATION_RETENTION_HOURS` | `24`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let stream_interval_ms: u64 = std::env::var("STREAM_INTERVAL_MS")
            .unwrap_or_else(|_| "1000".into())
            .parse()
            .expect("STREAM_INTERVAL_MS must be a valid u64");

        let store_queue_capacity: usize = std::env::var("STORE_QUEUE_CAPACITY")
            .unwrap_or_else(|_| "256".into())
            .parse()
            .expect("STORE_QUEUE_CAPACITY must be a valid usize");

        let observation_retention_hours: i64 = std::env::var("OBSERVATION_RETENTION_HOURS")
            .unwrap_or_else(|_| "24".into())
            .parse()
            .expect("OBSERVATION_RETENTION_HOURS must be a valid i64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            stream_interval_ms,
            store_queue_capacity,
            observation_retention_hours,
        }
    }
}
