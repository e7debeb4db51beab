use std::env;

use crate::infrastructure::gnews::PLACEHOLDER_API_KEY;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gnews_api_key: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            // The placeholder default keeps the service functional without a
            // credential: every search then serves the built-in sample data.
            gnews_api_key: env::var("GNEWS_API_KEY")
                .unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string()),
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(config)
    }

    pub fn upstream_enabled(&self) -> bool {
        !self.gnews_api_key.is_empty() && self.gnews_api_key != PLACEHOLDER_API_KEY
    }
}
