// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

/// Connection defaults provided by the hosting environment. Serialized in the shape of the
/// `/api/env` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvDefaults {
    #[serde(rename = "API_URL", default)]
    pub api_url: Option<String>,
    #[serde(rename = "ASSISTANT_ID", default)]
    pub assistant_id: Option<String>,
}

impl EnvDefaults {
    /// Reads `API_URL` and `ASSISTANT_ID`, falling back to their `NEXT_PUBLIC_` variants.
    pub fn from_process_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, fallback: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .or_else(|| lookup(fallback).filter(|value| !value.is_empty()))
        };

        Self {
            api_url: read("API_URL", "NEXT_PUBLIC_API_URL"),
            assistant_id: read("ASSISTANT_ID", "NEXT_PUBLIC_ASSISTANT_ID"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_falls_back_to_public_variables() {
        let vars = HashMap::from([
            ("API_URL", ""),
            ("NEXT_PUBLIC_API_URL", "https://public.example.com"),
            ("ASSISTANT_ID", "private-agent"),
            ("NEXT_PUBLIC_ASSISTANT_ID", "public-agent"),
        ]);

        let env = EnvDefaults::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(env.api_url.as_deref(), Some("https://public.example.com"));
        assert_eq!(env.assistant_id.as_deref(), Some("private-agent"));
    }

    #[test]
    fn test_deserializes_env_endpoint_payload() {
        let env: EnvDefaults = serde_json::from_str(
            r#"{"API_URL":"https://agents.example.com","ASSISTANT_ID":null,"timestamp":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(env.api_url.as_deref(), Some("https://agents.example.com"));
        assert_eq!(env.assistant_id, None);
    }
}
