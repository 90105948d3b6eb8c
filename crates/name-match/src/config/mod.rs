use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_MAX_NAME_CHARS: usize = 512;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the name matching service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub limits: InputLimits,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("NAME_MATCH_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("NAME_MATCH_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("NAME_MATCH_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("NAME_MATCH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let max_name_chars = match env::var("NAME_MATCH_MAX_NAME_CHARS") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => return Err(ConfigError::InvalidNameLimit { value: raw }),
            },
            Err(_) => DEFAULT_MAX_NAME_CHARS,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            limits: InputLimits { max_name_chars },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Upper bounds drivers enforce before handing names to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    pub max_name_chars: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_name_chars: DEFAULT_MAX_NAME_CHARS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNameLimit { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "NAME_MATCH_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "NAME_MATCH_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNameLimit { value } => write!(
                f,
                "NAME_MATCH_MAX_NAME_CHARS must be a positive integer (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNameLimit { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("NAME_MATCH_ENV");
        env::remove_var("NAME_MATCH_HOST");
        env::remove_var("NAME_MATCH_PORT");
        env::remove_var("NAME_MATCH_LOG_LEVEL");
        env::remove_var("NAME_MATCH_MAX_NAME_CHARS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.limits, InputLimits::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("NAME_MATCH_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_environment_and_name_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("NAME_MATCH_ENV", "CI");
        env::set_var("NAME_MATCH_MAX_NAME_CHARS", " 64 ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.limits.max_name_chars, 64);
        reset_env();
    }

    #[test]
    fn rejects_zero_or_garbage_name_limit() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        for value in ["0", "many"] {
            env::set_var("NAME_MATCH_MAX_NAME_CHARS", value);
            match AppConfig::load() {
                Err(ConfigError::InvalidNameLimit { value: found }) => assert_eq!(found, value),
                other => panic!("expected invalid name limit, got {other:?}"),
            }
        }
        reset_env();
    }

    #[test]
    fn rejects_invalid_port_and_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("NAME_MATCH_PORT", "70000");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidPort)));
        reset_env();

        let server = ServerConfig {
            host: "not-an-ip".to_string(),
            port: 8080,
        };
        assert!(matches!(
            server.socket_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));
    }
}
