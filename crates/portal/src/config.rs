//! Portal configuration
//!
//! Environment-driven, loaded once at startup by the embedding shell.

use crate::error::{PortalError, PortalResult};

/// Configuration for the redirect-link client and route building
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL of the onboarding/dashboard link provider
    pub provider_base_url: String,
    /// Base URL of this portal, used to build absolute return paths
    pub app_base_url: String,
}

impl PortalConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `LINK_PROVIDER_BASE_URL` and `APP_BASE_URL`. A `.env` file is
    /// honored if present.
    pub fn from_env() -> PortalResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            provider_base_url: require_env("LINK_PROVIDER_BASE_URL")?,
            app_base_url: require_env("APP_BASE_URL")?,
        })
    }

    pub fn new(provider_base_url: impl Into<String>, app_base_url: impl Into<String>) -> Self {
        Self {
            provider_base_url: trim_trailing_slash(provider_base_url.into()),
            app_base_url: trim_trailing_slash(app_base_url.into()),
        }
    }
}

fn require_env(name: &str) -> PortalResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(trim_trailing_slash(value)),
        _ => Err(PortalError::MissingEnv(name.to_string())),
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = PortalConfig::new("https://link.example.com/", "https://portal.example.com");
        assert_eq!(config.provider_base_url, "https://link.example.com");
        assert_eq!(config.app_base_url, "https://portal.example.com");
    }
}
