#[derive(Clone)]
pub struct Config {
    pub api_base: String,
    pub refresh_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var("API_BASE")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            refresh_secs: std::env::var("REFRESH_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }
}
