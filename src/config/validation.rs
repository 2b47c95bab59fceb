use crate::config::types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Longest fetch timeout accepted (seconds)
const MAX_FETCH_TIMEOUT_SECS: u64 = 300;

/// Largest fetch concurrency bound accepted
const MAX_CONCURRENT_FETCHES: usize = 1000;

/// Validates the entire configuration
///
/// The binary calls this again after applying command-line overrides.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_depth < 1 {
        return Err(ConfigError::Validation(format!(
            "max_depth must be >= 1, got {}",
            config.max_depth
        )));
    }

    if config.fetch_timeout_secs < 1 || config.fetch_timeout_secs > MAX_FETCH_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "fetch_timeout_secs must be between 1 and {}, got {}",
            MAX_FETCH_TIMEOUT_SECS, config.fetch_timeout_secs
        )));
    }

    if let Some(limit) = config.max_concurrent_fetches {
        if limit < 1 || limit > MAX_CONCURRENT_FETCHES {
            return Err(ConfigError::Validation(format!(
                "max_concurrent_fetches must be between 1 and {}, got {}",
                MAX_CONCURRENT_FETCHES, limit
            )));
        }
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    if let Some(contact) = &config.contact_url {
        Url::parse(contact)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.report_path {
        if path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "report_path cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}
