use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use serde_json::{Value, json};

use crate::error::RelayError;
use crate::models::AppState;
use crate::models::oauth::LogoutForm;

pub async fn logout_handler(
    State(app_state): State<AppState>,
    Form(form): Form<LogoutForm>,
) -> Result<Json<Value>, RelayError> {
    if form.access_token.is_empty() {
        return Err(RelayError::MissingAccessToken);
    }

    let cfg = &app_state.config;
    let body = [
        ("access_token", form.access_token.as_str()),
        ("client_id", cfg.channel_id.as_str()),
        ("client_secret", cfg.channel_secret.as_str()),
    ];

    let response = app_state
        .http
        .post(&cfg.revoke_url)
        .form(&body)
        .send()
        .await
        .map_err(|e| RelayError::UpstreamTransport("revoke token", e))?;

    // Revocation trust is delegated to the provider; nothing is recorded
    // locally either way.
    if response.status() != StatusCode::OK {
        return Err(RelayError::RevokeRejected(response.status()));
    }

    Ok(Json(json!({ "message": "token has been revoked" })))
}
