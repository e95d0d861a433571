use std::env;
use std::path::Path;

use crate::error::StartupError;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REGION: &str = "us-east-1";

// Environment variable names. Both key variables are required; the server
// refuses to start without them.
pub const ENV_ACCESS_KEY_ID: &str = "CLOUD_ACCESS_KEY_ID";
pub const ENV_SECRET_ACCESS_KEY: &str = "CLOUD_SECRET_ACCESS_KEY";
pub const ENV_REGION: &str = "CLOUD_REGION";
pub const ENV_API_ENDPOINT: &str = "CLOUD_API_ENDPOINT";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Immutable process configuration, resolved once at startup and injected
/// into every request handler through `AppState`.
#[derive(Clone, Debug)]
pub struct Settings {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub endpoint: String,
}

impl Settings {
    pub fn from_env() -> Result<Settings, StartupError> {
        let access_key_id = require_env(ENV_ACCESS_KEY_ID)?;
        let secret_access_key = require_env(ENV_SECRET_ACCESS_KEY)?;
        let region = env::var(ENV_REGION)
            .ok()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let endpoint = match env::var(ENV_API_ENDPOINT) {
            Ok(raw) if !raw.trim().is_empty() => sanitize_endpoint(&raw),
            _ => default_endpoint(&region),
        };
        Ok(Settings {
            access_key_id,
            secret_access_key,
            region,
            endpoint,
        })
    }
}

fn require_env(name: &'static str) -> Result<String, StartupError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(StartupError::MissingEnv(name)),
    }
}

pub fn default_endpoint(region: &str) -> String {
    format!("https://compute.{}.api.skyview.cloud", region)
}

pub fn sanitize_endpoint(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
