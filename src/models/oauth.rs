use serde::{Deserialize, Serialize};

/// Query parameters on the provider's authorization redirect.
///
/// The provider also echoes `state`, but the relay keeps no record of the
/// value it issued, so there is nothing to compare against and the
/// parameter is not read.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileParams {
    #[serde(default)]
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct LogoutForm {
    #[serde(default)]
    pub access_token: String,
}

/// The two fields relayed from the provider's token response. Whatever
/// else the provider sends (`token_type`, `expires_in`, ...) is dropped.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
