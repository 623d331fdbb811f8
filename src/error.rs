//! Error surface shared by every relay endpoint.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Everything a relay handler can fail with. Each variant carries the HTTP
/// status and `{"message"}` body rendered by the [`IntoResponse`] impl.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("code is missing")]
    MissingCode,

    #[error("access_token is required")]
    MissingAccessToken,

    /// The secure random source could not supply bytes.
    #[error("cannot generate state")]
    StateGeneration(#[from] rand::Error),

    /// The provider could not be reached at all.
    #[error("cannot {0}")]
    UpstreamTransport(&'static str, #[source] reqwest::Error),

    /// The provider answered, but the body did not decode into the shape
    /// this relay extracts from.
    #[error("unexpected provider response while trying to {0}")]
    ResponseShape(&'static str, #[source] reqwest::Error),

    /// The provider rejected the revocation with a non-200 status.
    #[error("cannot revoke token")]
    RevokeRejected(StatusCode),
}

impl RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCode | Self::MissingAccessToken => StatusCode::BAD_REQUEST,
            Self::StateGeneration(_)
            | Self::UpstreamTransport(..)
            | Self::ResponseShape(..)
            | Self::RevokeRejected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
