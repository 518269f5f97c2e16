use std::env;

use anyhow::{Context, Result};

/// Runtime configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub gnews_api_key: String,
    pub gnews_api_url: String,
    pub hf_api_token: String,
    pub hf_api_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            gnews_api_key: env::var("GNEWS_API_KEY").context("GNEWS_API_KEY not set")?,
            gnews_api_url: env::var("GNEWS_API_URL")
                .unwrap_or_else(|_| gnews_client::DEFAULT_SEARCH_URL.to_string()),
            hf_api_token: env::var("HF_API_TOKEN").context("HF_API_TOKEN not set")?,
            hf_api_url: env::var("HF_API_URL")
                .unwrap_or_else(|_| zeroshot_client::DEFAULT_INFERENCE_URL.to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
