use super::defaults::{
    DEFAULT_BACKEND_BIND, DEFAULT_BACKEND_URL, DEFAULT_FRONTEND_BIND,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_STARTUP_DELAY_MS,
};
use super::error::ConfigError;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

/// `[backend]` table: where the `/chat` API listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub bind: SocketAddr,
    pub cors_origins: Vec<String>,
}

/// `[frontend]` table: where the web form listens and how it reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    pub bind: SocketAddr,
    pub backend_url: String,
    pub request_timeout: Duration,
    pub startup_delay: Duration,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(super) struct RawBackend {
    bind: String,
    cors_origins: Vec<String>,
}

impl Default for RawBackend {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BACKEND_BIND.to_string(),
            cors_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(super) struct RawFrontend {
    bind: String,
    backend_url: String,
    request_timeout_secs: u64,
    startup_delay_ms: u64,
}

impl Default for RawFrontend {
    fn default() -> Self {
        Self {
            bind: DEFAULT_FRONTEND_BIND.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            startup_delay_ms: DEFAULT_STARTUP_DELAY_MS,
        }
    }
}

fn parse_bind(section: &'static str, value: String) -> Result<SocketAddr, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidBind { section, value })
}

impl TryFrom<RawBackend> for BackendConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBackend) -> Result<Self, Self::Error> {
        Ok(Self {
            bind: parse_bind("backend", raw.bind)?,
            cors_origins: raw.cors_origins,
        })
    }
}

impl TryFrom<RawFrontend> for FrontendConfig {
    type Error = ConfigError;

    fn try_from(raw: RawFrontend) -> Result<Self, Self::Error> {
        if raw.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroRequestTimeout);
        }
        Ok(Self {
            bind: parse_bind("frontend", raw.bind)?,
            backend_url: raw.backend_url,
            request_timeout: Duration::from_secs(raw.request_timeout_secs),
            startup_delay: Duration::from_millis(raw.startup_delay_ms),
        })
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            bind: ([127, 0, 0, 1], 9999).into(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            bind: ([127, 0, 0, 1], 8501).into(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            startup_delay: Duration::from_millis(DEFAULT_STARTUP_DELAY_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_bind_address() {
        let raw = RawBackend {
            bind: "not-an-addr".to_string(),
            cors_origins: Vec::new(),
        };
        let err = BackendConfig::try_from(raw).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBind { section: "backend", .. }));
    }

    #[test]
    fn frontend_defaults_match_form_timeouts() {
        let config = FrontendConfig::try_from(RawFrontend::default()).expect("defaults parse");
        assert_eq!(config.request_timeout, Duration::from_secs(8));
        assert_eq!(config.startup_delay, Duration::from_millis(2000));
        assert_eq!(config.backend_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn rejects_zero_request_timeout() {
        let raw = RawFrontend {
            request_timeout_secs: 0,
            ..RawFrontend::default()
        };
        let err = FrontendConfig::try_from(raw).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroRequestTimeout));
    }
}
