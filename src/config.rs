use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub password_min_len: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let password_min_len = std::env::var("USER_PASSWORD_MIN_LEN")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(8);
        Ok(Self { password_min_len })
    }
}
