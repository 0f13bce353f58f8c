use anyhow::{Context, Result};

const DEFAULT_HEALTH_PORT: u16 = 8080;

/// Runtime configuration, read once at startup from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token (`TOKEN`).
    pub telegram_token: String,
    /// NewsAPI key for the `/news` command (`NEWS_API_KEY`).
    pub news_api_key: String,
    /// Port the health endpoint binds to (`PORT`, default 8080).
    pub health_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let telegram_token = require("TOKEN")?;
        let news_api_key = require("NEWS_API_KEY")?;

        let health_port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_HEALTH_PORT,
        };

        Ok(Self {
            telegram_token,
            news_api_key,
            health_port,
        })
    }
}

// An empty value is treated the same as an unset one.
fn require(name: &str) -> Result<String> {
    let value = std::env::var(name).with_context(|| format!("{name} is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("{name} is set but empty");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_required() {
        std::env::set_var("TOKEN", "123456:test-token");
        std::env::set_var("NEWS_API_KEY", "test-news-key");
        std::env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn test_missing_token_is_fatal() {
        set_required();
        std::env::remove_var("TOKEN");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("TOKEN"));
    }

    #[test]
    #[serial]
    fn test_missing_news_api_key_is_fatal() {
        set_required();
        std::env::remove_var("NEWS_API_KEY");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("NEWS_API_KEY"));
    }

    #[test]
    #[serial]
    fn test_empty_token_is_fatal() {
        set_required();
        std::env::set_var("TOKEN", "  ");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_default_port_applied() {
        set_required();
        let config = Config::from_env().unwrap();
        assert_eq!(config.health_port, 8080);
        assert_eq!(config.telegram_token, "123456:test-token");
        assert_eq!(config.news_api_key, "test-news-key");
    }

    #[test]
    #[serial]
    fn test_port_override() {
        set_required();
        std::env::set_var("PORT", "9001");
        let config = Config::from_env().unwrap();
        assert_eq!(config.health_port, 9001);
        std::env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn test_non_numeric_port_is_fatal() {
        set_required();
        std::env::set_var("PORT", "not-a-port");
        assert!(Config::from_env().is_err());
        std::env::remove_var("PORT");
    }
}
