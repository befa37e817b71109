/// Server configuration, sourced from the environment.
///
/// A `.env` file is honored when present. Every knob has a default so the
/// server starts with nothing but `WT_JWT_SECRET` set; without that one a
/// random secret is generated at startup (tokens then die with the process).
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub cors_allow_origins: String,
    pub request_timeout_ms: u64,
    /// Raw secret material; decoded (base64 or plain bytes) by the auth layer.
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: i64,
}

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_PATH: &str = "./db/wealthtrack.db";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
/// 8 hours.
const DEFAULT_TOKEN_TTL_SECS: i64 = 28_800;

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            listen_addr: env_or("WT_LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
            db_path: env_or("WT_DB_PATH", DEFAULT_DB_PATH),
            cors_allow_origins: env_or("WT_CORS_ALLOW_ORIGINS", "*"),
            request_timeout_ms: std::env::var("WT_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
            jwt_secret: std::env::var("WT_JWT_SECRET")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            token_ttl_secs: std::env::var("WT_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_TTL_SECS),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
