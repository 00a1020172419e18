use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub database: DatabaseConfig,

    #[command(flatten)]
    pub auth: AuthConfig,

    #[command(flatten)]
    pub rate_limit: RateLimitConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "CONTATO_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "CONTATO_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Port for the management endpoints (liveness/readiness)
    #[arg(long, env = "CONTATO_MGMT_PORT", default_value_t = 3001)]
    pub mgmt_port: u16,
}

#[derive(Clone, Debug, Args)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[arg(long, env = "CONTATO_DATABASE_URL")]
    pub url: String,

    /// Maximum number of pooled connections
    #[arg(long, env = "CONTATO_DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Timeout for acquiring a connection from the pool
    #[arg(long, env = "CONTATO_DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 5)]
    pub acquire_timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct AuthConfig {
    /// Secret key used to verify session tokens issued by the auth provider
    #[arg(long, env = "CONTATO_SESSION_SECRET")]
    pub session_secret: String,

    /// Name of the session cookie set by the auth provider
    #[arg(long, env = "CONTATO_SESSION_COOKIE", default_value = "app_session")]
    pub session_cookie: String,
}

#[derive(Clone, Debug, Args)]
pub struct RateLimitConfig {
    /// Requests per second allowed for the public submit endpoint
    #[arg(long, env = "CONTATO_RATE_LIMIT_PER_SECOND", default_value_t = 2)]
    pub per_second: u32,

    /// Burst allowance for the public submit endpoint
    #[arg(long, env = "CONTATO_RATE_LIMIT_BURST", default_value_t = 5)]
    pub burst: u32,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "CONTATO_LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }
}
