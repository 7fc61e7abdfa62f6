use crate::core::normalizer::normalize_tree;
use crate::domain::model::Activity;
use crate::domain::ports::ActivitySource;
use crate::utils::error::{ProxyError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_UPSTREAM_URL: &str = "http://www.boredapi.com/api/activity/";

pub struct HttpActivityFetcher {
    client: Client,
    endpoint: String,
}

impl HttpActivityFetcher {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Parses an upstream body into a normalized [`Activity`].
pub fn parse_activity(body: &str) -> Result<Activity> {
    let payload: serde_json::Value = serde_json::from_str(body)?;

    match normalize_tree(payload) {
        serde_json::Value::Object(fields) => Ok(Activity::new(fields)),
        other => Err(ProxyError::UnexpectedPayload {
            message: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[async_trait]
impl ActivitySource for HttpActivityFetcher {
    async fn fetch(&self) -> Result<Activity> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.text().await?;
        parse_activity(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_normalizes_payload() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/activity/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "activity": "Go to a concert with some friends",
                    "type": "social",
                    "participants": 4,
                    "price": 0.6,
                    "link": "",
                    "key": "4558850",
                    "accessibility": 0.4
                }));
        });

        let fetcher = HttpActivityFetcher::new(server.url("/api/activity/")).unwrap();
        let activity = fetcher.fetch().await.unwrap();

        api_mock.assert();
        assert_eq!(activity.accessibility(), Some("Medium"));
        assert_eq!(activity.price(), Some("High"));
        assert_eq!(activity.fields.get("participants").unwrap().as_i64(), Some(4));
        assert_eq!(
            activity.fields.get("activity").unwrap().as_str(),
            Some("Go to a concert with some friends")
        );
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_fetch_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/activity/");
            then.status(503);
        });

        let fetcher = HttpActivityFetcher::new(server.url("/api/activity/")).unwrap();
        let err = fetcher.fetch().await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, ProxyError::UpstreamStatus { status: 503, .. }));
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_parse_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/activity/");
            then.status(200).body("{\"activity\": ");
        });

        let fetcher = HttpActivityFetcher::new(server.url("/api/activity/")).unwrap();
        let err = fetcher.fetch().await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, ProxyError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_upstream_is_fetch_error() {
        // Nothing listens on port 9 on the loopback interface.
        let fetcher = HttpActivityFetcher::new("http://127.0.0.1:9/api/activity/").unwrap();
        let err = fetcher.fetch().await.unwrap_err();

        assert!(matches!(err, ProxyError::Fetch(_)));
    }

    #[test]
    fn test_parse_activity_rejects_non_object() {
        let err = parse_activity("[1, 2, 3]").unwrap_err();

        assert!(matches!(err, ProxyError::UnexpectedPayload { .. }));
        assert!(err.to_string().contains("an array"));
    }
}
