// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Connection settings passed in the page's query string (`?apiUrl=…&assistantId=…`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOverrides {
    pub api_url: Option<String>,
    pub assistant_id: Option<String>,
}

impl QueryOverrides {
    /// Parses a query string with or without its leading `?`. Empty values count as absent.
    pub fn from_query(query: &str) -> Self {
        let mut overrides = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "apiUrl" => overrides.api_url = Some(value.into_owned()),
                "assistantId" => overrides.assistant_id = Some(value.into_owned()),
                _ => (),
            }
        }

        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_keys() {
        let overrides = QueryOverrides::from_query(
            "?apiUrl=https%3A%2F%2Fagents.example.com&assistantId=support&threadId=abc",
        );
        assert_eq!(
            overrides,
            QueryOverrides {
                api_url: Some("https://agents.example.com".to_string()),
                assistant_id: Some("support".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_values_are_absent() {
        assert_eq!(
            QueryOverrides::from_query("apiUrl=&assistantId="),
            QueryOverrides::default()
        );
        assert_eq!(QueryOverrides::from_query(""), QueryOverrides::default());
    }
}
