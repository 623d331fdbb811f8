use axum::Json;
use axum::extract::{Query, State};
use serde_json::Value;

use crate::error::RelayError;
use crate::models::AppState;
use crate::models::oauth::ProfileParams;

pub async fn profile_handler(
    State(app_state): State<AppState>,
    Query(params): Query<ProfileParams>,
) -> Result<Json<Value>, RelayError> {
    if params.access_token.is_empty() {
        return Err(RelayError::MissingAccessToken);
    }

    let response = app_state
        .http
        .get(&app_state.config.profile_url)
        .bearer_auth(&params.access_token)
        .send()
        .await
        .map_err(|e| RelayError::UpstreamTransport("get profile", e))?;

    // Forwarded verbatim; the provider's schema is not validated here.
    let profile: Value = response
        .json()
        .await
        .map_err(|e| RelayError::ResponseShape("get profile", e))?;

    Ok(Json(profile))
}
