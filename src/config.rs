use std::env;

pub const SERVICE_NAME: &str = "Student Travel Planner API";
pub const SERVICE_VERSION: &str = "1.0";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

/// Origins allowed by the CORS layer (local development hosts only).
pub const ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://10.85.67.48:3000",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API credential. Absence is logged at startup, not enforced;
    /// requests made without it fail inside the provider call.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub port: u16,
}

impl AppConfig {
    /// Read configuration from the environment once at process start.
    pub fn from_env() -> Self {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            gemini_api_key,
            gemini_model,
            port,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
