use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::RelayError;
use crate::models::AppState;

const STATE_LEN: usize = 16;

/// 16 bytes from the OS entropy source, URL-safe base64 (padded).
///
/// The value rides the authorization redirect and comes back on the
/// callback, but it is never stored server-side, so the callback cannot
/// verify it. The flow carries no CSRF binding.
pub fn generate_state() -> Result<String, RelayError> {
    let mut buf = [0u8; STATE_LEN];
    OsRng.try_fill_bytes(&mut buf)?;

    Ok(URL_SAFE.encode(buf))
}

/// Values are substituted verbatim; nothing here percent-encodes. Callers
/// supply already URL-safe input.
pub fn build_authorize_url(
    auth_url: &str,
    client_id: &str,
    redirect_uri: &str,
    state: &str,
) -> String {
    format!(
        "{auth_url}?response_type=code&client_id={client_id}&redirect_uri={redirect_uri}&state={state}&scope=profile"
    )
}

pub async fn login_handler(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, RelayError> {
    let state = generate_state()?;
    let cfg = &app_state.config;
    let location = build_authorize_url(&cfg.auth_url, &cfg.channel_id, &cfg.redirect_uri, &state);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorize_url_is_byte_exact() {
        assert_eq!(
            build_authorize_url("https://p/auth", "CID", "https://r/cb", "S1"),
            "https://p/auth?response_type=code&client_id=CID&redirect_uri=https://r/cb&state=S1&scope=profile"
        );
    }

    #[test]
    fn state_decodes_to_sixteen_bytes() {
        let state = generate_state().unwrap();
        let decoded = URL_SAFE.decode(state.as_bytes()).unwrap();
        assert_eq!(decoded.len(), STATE_LEN);
    }

    #[test]
    fn states_are_not_repeated() {
        assert_ne!(generate_state().unwrap(), generate_state().unwrap());
    }
}
