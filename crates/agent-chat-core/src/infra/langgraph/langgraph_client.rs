// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{format_err, Result};
use reqwest::{Method, RequestBuilder};
use url::Url;

use crate::domain::connection::models::ConnectionConfig;

const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the REST API of a LangGraph compatible agent service.
#[derive(Debug, Clone, Default)]
pub struct LangGraphClient {
    pub(super) http: reqwest::Client,
}

impl LangGraphClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    pub(super) fn request(
        &self,
        config: &ConnectionConfig,
        method: Method,
        path: &[&str],
    ) -> Result<RequestBuilder> {
        let url = endpoint(&config.api_url, path)?;
        let mut builder = self.http.request(method, url);

        if let Some(api_key) = config.api_key() {
            builder = builder.header(API_KEY_HEADER, api_key);
        }

        Ok(builder)
    }
}

/// Appends `path` to `base`, keeping any path prefix `base` carries.
fn endpoint(base: &Url, path: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format_err!("API URL {base} cannot be used as a base URL."))?
        .pop_if_empty()
        .extend(path);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_prefix() {
        let base = Url::parse("https://agents.example.com/langgraph").unwrap();
        assert_eq!(
            endpoint(&base, &["threads", "search"]).unwrap().as_str(),
            "https://agents.example.com/langgraph/threads/search"
        );

        let base = Url::parse("http://localhost:2024/").unwrap();
        assert_eq!(
            endpoint(&base, &["assistants"]).unwrap().as_str(),
            "http://localhost:2024/assistants"
        );
    }

    #[test]
    fn test_endpoint_rejects_opaque_urls() {
        let base = Url::parse("mailto:agents@example.com").unwrap();
        assert!(endpoint(&base, &["threads"]).is_err());
    }
}
