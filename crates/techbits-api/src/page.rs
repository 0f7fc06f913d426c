//! The single browser page.

use axum::response::Html;

const INDEX: &str = include_str!("../assets/index.html");

/// `GET /`
pub async fn index() -> Html<&'static str> { Html(INDEX) }
