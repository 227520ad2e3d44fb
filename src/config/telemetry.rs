//! Telemetry configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Tracing subscriber settings
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// EnvFilter directive, e.g. "info" or "cnnct=debug"
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl TelemetryConfig {
    /// Validate the filter directive is present
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filter.trim().is_empty() {
            return Err(ValidationError::EmptyTelemetryFilter);
        }
        Ok(())
    }

    /// Install a global tracing subscriber with this filter.
    ///
    /// Safe to call once per process; used by the demo binary.
    pub fn init(&self) {
        use tracing_subscriber::EnvFilter;

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(self.filter.clone())),
            )
            .init();
    }
}
