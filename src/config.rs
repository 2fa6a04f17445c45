use crate::error::config::ConfigError;

/// Runtime configuration read from the environment.
pub struct Config {
    /// Database connection string, `postgres://...` or `sqlite://...`
    pub database_url: String,
    /// Upper bound on pooled database connections
    pub max_connections: u32,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Config {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_LOG_FILTER: &'static str = "info";

    /// Reads the configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let max_connections = match lookup("SMETA_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| ConfigError::InvalidEnvValue {
                    var: "SMETA_MAX_CONNECTIONS".to_string(),
                    reason: format!("expected a positive integer, got '{}'", value),
                })?,
            None => Self::DEFAULT_MAX_CONNECTIONS,
        };

        let log_filter =
            lookup("SMETA_LOG").unwrap_or_else(|| Self::DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            database_url,
            max_connections,
            log_filter,
        })
    }
}
