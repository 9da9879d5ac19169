use crate::cors_config::is_http_url;
use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL the CLI talks to; derived from `[server]` when unset.
    pub api_base_url: Option<String>,
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = &self.api_base_url
            && !is_http_url(url)
        {
            return Err(ConfigError::client(format!(
                "client.api_base_url must be an http(s):// URL, got '{}'",
                url
            )));
        }

        Ok(())
    }
}
