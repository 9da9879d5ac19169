use crate::CliClientResult;

use sg_config::Config;

/// Server URL: explicit flag > validated configuration.
pub fn resolve_server_url(flag: Option<String>) -> CliClientResult<String> {
    match flag {
        Some(url) => Ok(url),
        None => {
            let config = Config::load()?;
            config.validate()?;
            Ok(config.api_base_url())
        }
    }
}
