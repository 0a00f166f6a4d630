//! Application state management
//!
//! The state is an immutable bundle of configuration plus the upstream
//! backend handle, constructed once at startup and shared across requests
//! behind an `Arc`. When neither pitch mode nor a credential is configured
//! the backend slot stays empty and every generation request fails fast.

use crate::config::Config;
use crate::error::AppError;
use crate::upstream::{DemoBackend, GeminiBackend, GenerativeBackend};
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    backend: Option<Arc<dyn GenerativeBackend>>,
}

impl AppState {
    /// Build the state from configuration
    ///
    /// Pitch mode wins over a configured credential. Without either, no
    /// backend handle is constructed; requests are rejected with
    /// [`AppError::MissingConfiguration`] instead of attempting a doomed
    /// upstream call.
    pub fn from_config(config: Config) -> Self {
        let backend: Option<Arc<dyn GenerativeBackend>> = if config.upstream.pitch_mode {
            tracing::info!("Pitch mode enabled, upstream calls replaced by fixtures");
            Some(Arc::new(DemoBackend::new()))
        } else if let Some(api_key) = config.upstream.api_key.clone() {
            Some(Arc::new(GeminiBackend::new(api_key, &config.upstream)))
        } else {
            tracing::warn!(
                "GEMINI_API_KEY is not set and pitch mode is disabled; \
                 all generation requests will fail"
            );
            None
        };

        Self { config, backend }
    }

    /// Build state around an explicit backend (used by tests)
    pub fn with_backend(config: Config, backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            config,
            backend: Some(backend),
        }
    }

    /// The configured backend, or `MissingConfiguration` if there is none
    pub fn backend(&self) -> Result<&Arc<dyn GenerativeBackend>, AppError> {
        self.backend.as_ref().ok_or(AppError::MissingConfiguration)
    }
}
