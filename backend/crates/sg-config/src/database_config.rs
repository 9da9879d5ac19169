use crate::{ConfigError, ConfigErrorResult, DATABASE_URL_SCHEME, DEFAULT_DATABASE_FILENAME};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file, relative to the config directory.
    pub path: String,
    /// Connection string; takes precedence over `path` when set.
    pub url: Option<String>,
}

/// Where the server should open its database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    File(PathBuf),
    Url(String),
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            url: None,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = &self.url {
            if !url.starts_with(DATABASE_URL_SCHEME) {
                return Err(ConfigError::database(format!(
                    "database.url must start with '{}', got '{}'",
                    DATABASE_URL_SCHEME, url
                )));
            }
            return Ok(());
        }

        let db_path = Path::new(&self.path);
        if self.path.trim().is_empty() || db_path.is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    pub fn target(&self, config_dir: &Path) -> DatabaseTarget {
        match &self.url {
            Some(url) => DatabaseTarget::Url(url.clone()),
            None => DatabaseTarget::File(config_dir.join(&self.path)),
        }
    }
}
