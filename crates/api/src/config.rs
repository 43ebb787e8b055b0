use std::net::{IpAddr, SocketAddr};

/// Deployment environment. Only `Development` exposes the OpenAPI document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Deployment environment (default: `development`).
    pub env: AppEnv,
    /// Maximum pooled SQLite connections (default: `5`).
    pub db_max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            env: AppEnv::Development,
            db_max_connections: 5,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default       |
    /// |----------------------|---------------|
    /// | `HOST`               | `0.0.0.0`     |
    /// | `PORT`               | `3000`        |
    /// | `APP_ENV`            | `development` |
    /// | `DB_MAX_CONNECTIONS` | `5`           |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(v) => parse_var("HOST", "an IP address", v)?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(v) => parse_var("PORT", "a valid u16", v)?,
            None => defaults.port,
        };

        let env = match lookup("APP_ENV") {
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "development" | "dev" => AppEnv::Development,
                "production" | "prod" => AppEnv::Production,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "APP_ENV",
                        expected: "`development` or `production`",
                        value: v,
                    })
                }
            },
            None => defaults.env,
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => {
                let n: u32 = parse_var("DB_MAX_CONNECTIONS", "a positive integer", v.clone())?;
                if n == 0 {
                    return Err(ConfigError::Invalid {
                        var: "DB_MAX_CONNECTIONS",
                        expected: "a positive integer",
                        value: v,
                    });
                }
                n
            }
            None => defaults.db_max_connections,
        };

        Ok(Self {
            host,
            port,
            env,
            db_max_connections,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn expose_openapi(&self) -> bool {
        self.env == AppEnv::Development
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    value: String,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value,
    })
}
