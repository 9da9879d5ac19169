use crate::{CORS_ANY_ORIGIN, ConfigError, ConfigErrorResult};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Browser origins allowed to call the API. `*` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![String::from(CORS_ANY_ORIGIN)],
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == CORS_ANY_ORIGIN)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for origin in &self.allowed_origins {
            if origin == CORS_ANY_ORIGIN {
                continue;
            }
            if !is_origin(origin) {
                return Err(ConfigError::cors(format!(
                    "cors.allowed_origins entries must be '*' or a scheme://host[:port] origin with no path, got '{}'",
                    origin
                )));
            }
        }

        Ok(())
    }

    /// Parse a comma separated origin list, dropping blanks.
    pub(crate) fn parse_list(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

pub(crate) fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"));

    matches!(rest, Some(host) if !host.is_empty() && !host.contains(char::is_whitespace))
}

/// Browser `Origin` values carry no path, query or trailing slash.
fn is_origin(value: &str) -> bool {
    let authority = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"));

    is_http_url(value) && authority.is_some_and(|a| !a.contains(['/', '?', '#']))
}
