use std::env;
use std::path::PathBuf;

/// Config holds all application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub state_dir: PathBuf,
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn load() -> Self {
        Self {
            api_base_url: get_env("API_BASE_URL", "http://127.0.0.1:8000"),
            state_dir: env::var("STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_state_dir()),
            http_timeout_secs: get_env("HTTP_TIMEOUT_SECS", "30")
                .parse()
                .unwrap_or(30),
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn default_state_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("microtool"))
        .unwrap_or_else(|| PathBuf::from(".microtool-state"))
}
