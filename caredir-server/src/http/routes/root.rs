//! Root greeting route

use axum::{routing::get, Router};

use crate::http::AppState;

const GREETING: &str = "the server started successfully !!!";

/// GET / - greeting
async fn root() -> &'static str {
    GREETING
}

/// Root route
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root))
}
