//! Runtime HTTP settings read from the environment.

use std::env;
use std::time::Duration;

use tracing::warn;

/// Environment variable holding the HTTP timeout in seconds.
pub const TIMEOUT_ENV_VAR: &str = "GITAI_HTTP_TIMEOUT";

/// Environment variable replacing every provider's base URL.
pub const BASE_URL_ENV_VAR: &str = "GITAI_API_BASE_URL";

/// Transport settings for the AI client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpSettings {
    /// Whole-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Base URL used instead of each provider's own host.
    pub base_url_override: Option<String>,
}

impl HttpSettings {
    /// Read settings from `GITAI_HTTP_TIMEOUT` and `GITAI_API_BASE_URL`.
    ///
    /// Invalid timeout values are logged and ignored.
    pub fn from_env() -> Self {
        Self {
            timeout: timeout_from_env(),
            base_url_override: env::var(BASE_URL_ENV_VAR).ok().filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }
}

fn timeout_from_env() -> Option<Duration> {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => match v.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
            _ => {
                warn!(
                    "Invalid {} value '{}', using the transport default",
                    TIMEOUT_ENV_VAR, v
                );
                None
            }
        },
        _ => None,
    }
}
