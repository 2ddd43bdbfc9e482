//! Form page handler
//!
//! Serves the static, unstyled form wired to the JSON API. Layout and
//! styling are intentionally minimal.

use axum::response::Html;

/// Serve the form page
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
