//! Resolution of the settings needed to connect to Domino.

use crate::constants::{API_KEY_ENV_VAR, HOST_ENV_VAR};
use crate::errors::ConfigError;
use crate::types::{ApiKey, HostUrl, ProjectId};

/// Fully resolved settings of a [crate::DominoClient].
#[derive(Debug, Clone)]
pub struct DominoConfig {
    pub host: HostUrl,
    pub project: ProjectId,
    pub api_key: ApiKey,
}

impl DominoConfig {
    pub fn new(host: HostUrl, project: ProjectId, api_key: ApiKey) -> Self {
        Self {
            host,
            project,
            api_key,
        }
    }

    /// Resolve settings from the given values, falling back to the
    /// `DOMINO_API_HOST` and `DOMINO_USER_API_KEY` environment variables.
    pub fn resolve(
        project: &str,
        api_key: Option<String>,
        host: Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::resolve_with(|name| std::env::var(name).ok(), project, api_key, host)
    }

    /// Like [DominoConfig::resolve], reading variables through `lookup`.
    pub fn resolve_with<F>(
        lookup: F,
        project: &str,
        api_key: Option<String>,
        host: Option<String>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = host
            .or_else(|| lookup(HOST_ENV_VAR))
            .ok_or(ConfigError::MissingHost(HOST_ENV_VAR))?;
        let host = HostUrl::normalize(host)?;
        let project: ProjectId = project.parse()?;
        let api_key = api_key
            .or_else(|| lookup(API_KEY_ENV_VAR))
            .map(ApiKey::from)
            .ok_or(ConfigError::MissingApiKey(API_KEY_ENV_VAR))?;
        Ok(Self::new(host, project, api_key))
    }
}
