// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::{EnvDefaults, QueryOverrides};

pub const DEFAULT_API_URL: &str = "http://localhost:2024";
pub const DEFAULT_ASSISTANT_ID: &str = "agent";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API URL '{url}': {error}")]
    InvalidApiUrl { url: String, error: url::ParseError },
}

/// Where the agent service lives and which assistant (or graph) to talk to.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub api_url: Url,
    pub assistant_id: String,
    pub api_key: Option<SecretString>,
}

impl ConnectionConfig {
    pub fn new(api_url: &str, assistant_id: impl Into<String>) -> Result<Self, ConfigError> {
        let api_url = Url::parse(api_url).map_err(|error| ConfigError::InvalidApiUrl {
            url: api_url.to_string(),
            error,
        })?;

        Ok(Self {
            api_url,
            assistant_id: assistant_id.into(),
            api_key: None,
        })
    }

    /// Picks each setting from the query string first, the environment second and falls back
    /// to the built-in defaults.
    pub fn resolve(
        query: &QueryOverrides,
        env: Option<&EnvDefaults>,
    ) -> Result<Self, ConfigError> {
        fn non_empty(value: Option<&String>) -> Option<&str> {
            value.map(String::as_str).filter(|value| !value.is_empty())
        }

        let api_url = non_empty(query.api_url.as_ref())
            .or_else(|| env.and_then(|env| non_empty(env.api_url.as_ref())))
            .unwrap_or(DEFAULT_API_URL);
        let assistant_id = non_empty(query.assistant_id.as_ref())
            .or_else(|| env.and_then(|env| non_empty(env.assistant_id.as_ref())))
            .unwrap_or(DEFAULT_ASSISTANT_ID);

        Self::new(api_url, assistant_id)
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key
            .filter(|key| !key.is_empty())
            .map(SecretString::new);
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret().as_str())
    }

    /// Returns true if both configurations address the same assistant on the same service.
    pub fn same_target(&self, other: &ConnectionConfig) -> bool {
        self.api_url == other.api_url && self.assistant_id == other.assistant_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConnectionConfig::resolve(&QueryOverrides::default(), None).unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:2024/");
        assert_eq!(config.assistant_id, "agent");
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_query_overrides_env() {
        let env = EnvDefaults {
            api_url: Some("https://env.example.com".to_string()),
            assistant_id: Some("env-agent".to_string()),
        };
        let query = QueryOverrides {
            api_url: None,
            assistant_id: Some("query-agent".to_string()),
        };

        let config = ConnectionConfig::resolve(&query, Some(&env)).unwrap();
        assert_eq!(config.api_url.as_str(), "https://env.example.com/");
        assert_eq!(config.assistant_id, "query-agent");
    }

    #[test]
    fn test_empty_env_values_fall_through() {
        let env = EnvDefaults {
            api_url: Some(String::new()),
            assistant_id: Some(String::new()),
        };
        let config = ConnectionConfig::resolve(&QueryOverrides::default(), Some(&env)).unwrap();
        assert_eq!(config.assistant_id, DEFAULT_ASSISTANT_ID);
    }

    #[test]
    fn test_rejects_invalid_url() {
        let query = QueryOverrides {
            api_url: Some("not a url".to_string()),
            assistant_id: None,
        };
        assert!(matches!(
            ConnectionConfig::resolve(&query, None),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
    }

    #[test]
    fn test_api_key_is_optional() {
        let config = ConnectionConfig::new("http://localhost:2024", "agent")
            .unwrap()
            .with_api_key(Some("lsv2_secret".to_string()));
        assert_eq!(config.api_key(), Some("lsv2_secret"));

        let config = config.with_api_key(Some(String::new()));
        assert_eq!(config.api_key(), None);
    }
}
