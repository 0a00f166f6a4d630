//! Landing-page endpoint
//!
//! Serves the static HTML file with two environment-derived values
//! substituted into HTML comment placeholders, so the page can carry its
//! runtime configuration without a build step.

use crate::config::PageConfig;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tracing::error;

/// Placeholder replaced with the configured Supabase URL
pub const SUPABASE_URL_MARKER: &str = "<!-- ____SUPABASE_URL____ -->";
/// Placeholder replaced with the configured Supabase anon key
pub const SUPABASE_ANON_KEY_MARKER: &str = "<!-- ____SUPABASE_ANON_KEY____ -->";

const FALLBACK_PAGE: &str = "<h1>Error loading application</h1>\
    <p>Could not process configuration. Please check the server logs.</p>";

/// Handle `GET /`
pub async fn serve_index(State(state): State<Arc<AppState>>) -> Response {
    match render_page(&state.config.page).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(
                path = %state.config.page.index_path,
                error = %e,
                "Failed to render landing page"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Html(FALLBACK_PAGE)).into_response()
        }
    }
}

/// Read the template and substitute both placeholders
async fn render_page(config: &PageConfig) -> std::io::Result<String> {
    let html = tokio::fs::read_to_string(&config.index_path).await?;
    Ok(html
        .replace(SUPABASE_URL_MARKER, &config.supabase_url)
        .replace(SUPABASE_ANON_KEY_MARKER, &config.supabase_anon_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn page_config(path: &str) -> PageConfig {
        PageConfig {
            index_path: path.to_string(),
            supabase_url: "https://example.supabase.co".to_string(),
            supabase_anon_key: "anon-key-123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_substitutes_both_placeholders() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "<script>const url = \"{}\"; const key = \"{}\";</script>",
            SUPABASE_URL_MARKER, SUPABASE_ANON_KEY_MARKER
        )
        .unwrap();

        let html = render_page(&page_config(file.path().to_str().unwrap()))
            .await
            .unwrap();

        assert!(html.contains("https://example.supabase.co"));
        assert!(html.contains("anon-key-123"));
        assert!(!html.contains("____SUPABASE_URL____"));
        assert!(!html.contains("____SUPABASE_ANON_KEY____"));
    }

    #[tokio::test]
    async fn test_substitutes_repeated_placeholders() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{marker}{marker}", marker = SUPABASE_URL_MARKER).unwrap();

        let html = render_page(&page_config(file.path().to_str().unwrap()))
            .await
            .unwrap();

        assert_eq!(html, "https://example.supabase.cohttps://example.supabase.co");
    }

    #[tokio::test]
    async fn test_missing_template_is_an_error() {
        let result = render_page(&page_config("does/not/exist.html")).await;
        assert!(result.is_err());
    }
}
