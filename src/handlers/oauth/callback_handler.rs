use axum::Json;
use axum::extract::{Query, State};

use crate::error::RelayError;
use crate::models::AppState;
use crate::models::oauth::{CallbackParams, TokenPair};

pub async fn callback_handler(
    State(app_state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Json<TokenPair>, RelayError> {
    if params.code.is_empty() {
        return Err(RelayError::MissingCode);
    }

    let cfg = &app_state.config;
    let form = [
        ("grant_type", "authorization_code"),
        ("code", params.code.as_str()),
        ("redirect_uri", cfg.redirect_uri.as_str()),
        ("client_id", cfg.channel_id.as_str()),
        ("client_secret", cfg.channel_secret.as_str()),
    ];

    let response = app_state
        .http
        .post(&cfg.token_url)
        .form(&form)
        .send()
        .await
        .map_err(|e| RelayError::UpstreamTransport("exchange code to token", e))?;

    // An error status carries a JSON error body, which fails this decode
    // and surfaces as a shape error rather than a forwarded token pair.
    let tokens: TokenPair = response
        .json()
        .await
        .map_err(|e| RelayError::ResponseShape("exchange code to token", e))?;

    Ok(Json(tokens))
}
