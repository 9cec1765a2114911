//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed-window rate limiting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Window length in seconds (default: 15 minutes)
    pub window_secs: u64,

    /// Requests allowed per client within one window
    pub max_requests: u32,

    /// Number of tracked clients above which expired windows are pruned
    pub cleanup_threshold: usize,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 15 * 60,
            max_requests: 100,
            cleanup_threshold: 10_000,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Default log directive when `RUST_LOG` is not set
    pub log_level: String,

    /// Per-client request limits
    pub rate_limit: RateLimitConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, `config/server.*` and `TDEE_*` variables
    ///
    /// A bare `PORT` variable overrides the port last.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(env_source())
            .build();

        let config = match config_result {
            Ok(cfg) => cfg
                .try_deserialize::<Self>()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?,
            Err(e) => {
                tracing::warn!("Failed to read configuration ({}), using defaults", e);
                Self::default()
            }
        };

        Ok(config.with_port_override(std::env::var("PORT").ok().as_deref()))
    }

    /// Load configuration from an explicit file, still honoring `TDEE_*` variables
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(env_source())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn with_port_override(mut self, port: Option<&str>) -> Self {
        if let Some(raw) = port {
            match raw.trim().parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value '{}'", raw),
            }
        }
        self
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix("TDEE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Log sink shared between the subscriber and the assertion
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.rate_limit, RateLimitConfig::default());
    }

    #[test]
    fn test_rate_limit_config_default() {
        let rate_limit = RateLimitConfig::default();

        assert_eq!(rate_limit.window_secs, 900);
        assert_eq!(rate_limit.max_requests, 100);
        assert_eq!(rate_limit.cleanup_threshold, 10_000);
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_port_override() {
        let config = ServerConfig::default().with_port_override(Some("4000"));
        assert_eq!(config.port, 4000);

        let config = ServerConfig::default().with_port_override(Some("not-a-port"));
        assert_eq!(config.port, 3000);

        let config = ServerConfig::default().with_port_override(None);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_invalid_port_override_is_logged() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let config = tracing::subscriber::with_default(subscriber, || {
            ServerConfig::default().with_port_override(Some("abc"))
        });

        assert_eq!(config.port, 3000);
        let output = logs.contents();
        assert!(output.contains("WARN"));
        assert!(output.contains("Ignoring invalid PORT value 'abc'"));
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.rate_limit.max_requests, 100);
    }

    #[test]
    fn test_server_config_debug_format() {
        let config = ServerConfig::default();
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("ServerConfig"));
        assert!(debug_str.contains("0.0.0.0"));
        assert!(debug_str.contains("3000"));
    }
}
