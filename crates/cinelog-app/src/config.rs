//! Environment-driven application configuration.

use std::env;

/// Runtime configuration, read once at startup. Every field has a default so
/// the binary runs with no environment at all.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment name (`APP_ENV`).
    pub environment: String,
    /// Fallback tracing filter when `RUST_LOG` is unset (`LOG_LEVEL`).
    pub log_filter: String,
    /// Whether to run the seed flow before consuming (`CINELOG_DEMO`).
    pub run_demo: bool,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_owned()),
            log_filter: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned()),
            run_demo: env::var("CINELOG_DEMO")
                .map_or(true, |value| parse_toggle(&value)),
        }
    }
}

fn parse_toggle(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")
}
