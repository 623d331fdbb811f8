use std::env;

const DEFAULT_PORT: &str = "3000";

// LINE platform endpoints. Overridable per environment so a deployment (or
// a test) can point the relay somewhere else.
const LINE_AUTH_URL: &str = "https://access.line.me/oauth2/v2.1/authorize";
const LINE_TOKEN_URL: &str = "https://api.line.me/oauth2/v2.1/token";
const LINE_PROFILE_URL: &str = "https://api.line.me/v2/profile";
const LINE_REVOKE_URL: &str = "https://api.line.me/oauth2/v2.1/revoke";

/// Process-wide settings, read once at startup and handed to handlers
/// through [`AppState`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_port: String,
    pub channel_id: String,
    pub channel_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub profile_url: String,
    pub revoke_url: String,
}

impl AppConfig {
    /// Loads settings from the process environment (and `.env`, when
    /// present). Channel credentials are not validated here: an unset
    /// variable becomes an empty string, and the provider rejects the
    /// outbound calls built from it.
    pub fn from_env() -> Self {
        use dotenvy::dotenv;

        dotenv().ok();

        Self {
            app_port: env::var("APP_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string()),
            channel_id: env::var("LINE_CHANNEL_ID").unwrap_or_default(),
            channel_secret: env::var("LINE_CHANNEL_SECRET").unwrap_or_default(),
            redirect_uri: env::var("LINE_CHANNEL_REDIRECT_URI").unwrap_or_default(),
            auth_url: env::var("LINE_AUTH_URL").unwrap_or_else(|_| LINE_AUTH_URL.to_string()),
            token_url: env::var("LINE_TOKEN_URL").unwrap_or_else(|_| LINE_TOKEN_URL.to_string()),
            profile_url: env::var("LINE_PROFILE_URL")
                .unwrap_or_else(|_| LINE_PROFILE_URL.to_string()),
            revoke_url: env::var("LINE_REVOKE_URL")
                .unwrap_or_else(|_| LINE_REVOKE_URL.to_string()),
        }
    }
}

/// Shared handler context: immutable config plus one HTTP client reused
/// across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http: reqwest::Client,
}
