//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Upstream model configuration
    pub upstream: UpstreamConfig,
    /// Landing-page configuration
    pub page: PageConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Upstream model configuration
///
/// Which concrete model serves a given operation is a deployment decision,
/// so all model identifiers are overridable from the environment.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Gemini API key; `None` means live mode cannot be served
    pub api_key: Option<String>,
    /// When true, all upstream calls are replaced by canned demo fixtures
    pub pitch_mode: bool,
    /// Model used for text-only generation (ad copy, campaign text)
    pub text_model: String,
    /// Model used for multimodal analysis (product photo analysis)
    pub vision_model: String,
    /// Image-capable model used for compositing and visual generation
    pub image_model: String,
}

/// Landing-page configuration
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Path of the HTML template served at `/`
    pub index_path: String,
    /// Value substituted for the Supabase URL placeholder
    pub supabase_url: String,
    /// Value substituted for the Supabase anon key placeholder
    pub supabase_anon_key: String,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            upstream: UpstreamConfig {
                api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
                pitch_mode: env::var("PITCH_MODE")
                    .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                    .unwrap_or(false),
                text_model: env::var("GEMINI_TEXT_MODEL")
                    .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
                vision_model: env::var("GEMINI_VISION_MODEL")
                    .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
                image_model: env::var("GEMINI_IMAGE_MODEL")
                    .unwrap_or_else(|_| "gemini-2.5-flash-image".to_string()),
            },
            page: PageConfig {
                index_path: env::var("INDEX_HTML_PATH")
                    .unwrap_or_else(|_| "static/index.html".to_string()),
                supabase_url: env::var("SUPABASE_URL").unwrap_or_default(),
                supabase_anon_key: env::var("SUPABASE_ANON_KEY").unwrap_or_default(),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "PORT",
            "HOST",
            "GEMINI_API_KEY",
            "PITCH_MODE",
            "GEMINI_TEXT_MODEL",
            "GEMINI_VISION_MODEL",
            "GEMINI_IMAGE_MODEL",
            "INDEX_HTML_PATH",
            "SUPABASE_URL",
            "SUPABASE_ANON_KEY",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(config.upstream.api_key.is_none());
        assert!(!config.upstream.pitch_mode);
        assert_eq!(config.upstream.text_model, "gemini-2.5-flash");
        assert_eq!(config.page.index_path, "static/index.html");
    }

    #[test]
    #[serial]
    fn test_pitch_mode_parsing() {
        clear_env();
        for value in ["1", "true", "TRUE", "yes"] {
            env::set_var("PITCH_MODE", value);
            assert!(Config::from_env().upstream.pitch_mode, "value: {}", value);
        }
        env::set_var("PITCH_MODE", "0");
        assert!(!Config::from_env().upstream.pitch_mode);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_api_key_treated_as_absent() {
        clear_env();
        env::set_var("GEMINI_API_KEY", "");
        assert!(Config::from_env().upstream.api_key.is_none());
        clear_env();
    }
}
