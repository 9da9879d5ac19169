use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ClientConfig, ConfigError, ConfigErrorResult, CorsConfig,
    DEFAULT_CONFIG_DIR, DatabaseConfig, DatabaseTarget, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub client: ClientConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SG_CONFIG_DIR env var, else use ./.sg/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply SG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SG_CONFIG_DIR env var > ./.sg/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.cors.validate()?;
        self.client.validate()?;

        Ok(())
    }

    /// Database file (inside the config dir) or connection string.
    pub fn database_target(&self) -> ConfigErrorResult<DatabaseTarget> {
        let config_dir = Self::config_dir()?;
        Ok(self.database.target(&config_dir))
    }

    /// Absolute path of the log file, or None when logging to stdout.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(filename) = &self.logging.file else {
            return Ok(None);
        };

        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Base URL for API clients: explicit `client.api_base_url`, else the
    /// local server address.
    pub fn api_base_url(&self) -> String {
        if let Some(url) = &self.client.api_base_url {
            return url.trim_end_matches('/').to_string();
        }

        let host = match self.server.host.as_str() {
            "0.0.0.0" | "::" => "127.0.0.1",
            host => host,
        };
        format!("http://{}:{}", host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        match &self.database.url {
            Some(_) => info!("  database: <url>"),
            None => info!("  database: {}", self.database.path),
        }

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        if self.cors.allows_any_origin() {
            info!("  cors: any origin");
        } else {
            info!("  cors: {}", self.cors.allowed_origins.join(", "));
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SG_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("SG_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_option_string("SG_DATABASE_URL", &mut self.database.url);

        // Logging
        Self::apply_env_parse("SG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SG_LOG_FILE", &mut self.logging.file);

        // CORS
        if let Ok(val) = std::env::var("SG_CORS_ALLOWED_ORIGINS") {
            self.cors.allowed_origins = CorsConfig::parse_list(&val);
        }

        // Client
        Self::apply_env_option_string("SG_API_BASE_URL", &mut self.client.api_base_url);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
