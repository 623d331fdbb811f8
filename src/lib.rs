//! HTTP front-end for LINE's OAuth2 authorization-code flow: login
//! redirect, code-for-token exchange, bearer-forwarded profile fetch, and
//! token revocation. The relay holds no state between requests.

pub mod error;
pub mod handlers;
pub mod models;

pub use error::RelayError;
pub use models::{AppConfig, AppState};

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Builds the full route table under the versioned LINE prefix.
pub fn create_app(state: AppState) -> Router {
    let line_routes = Router::new()
        .route("/login", get(handlers::oauth::login_handler))
        .route("/callback", get(handlers::oauth::callback_handler))
        .route("/profile", get(handlers::oauth::profile_handler))
        .route("/logout", post(handlers::oauth::logout_handler));

    Router::new()
        .nest("/api/v1/line", line_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
