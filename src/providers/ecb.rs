use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::error::{Error, FetchError};
use crate::feed_provider::FeedProvider;

pub const DEFAULT_BASE_URL: &str = "https://www.ecb.europa.eu";

const FEED_PATH: &str = "/stats/eurofxref/eurofxref-daily.xml";

/// Fetches the daily reference-rate document published by the ECB.
pub struct EcbFeedProvider {
    base_url: String,
}

impl EcbFeedProvider {
    pub fn new(base_url: &str) -> Self {
        EcbFeedProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl FeedProvider for EcbFeedProvider {
    async fn fetch_daily(&self) -> Result<String, Error> {
        // Unique query string so intermediate HTTP caches never serve a
        // stale copy of the feed.
        let url = format!("{}{}?{}", self.base_url, FEED_PATH, Uuid::new_v4());
        debug!("Requesting rate feed from {url}");

        let client = reqwest::Client::builder()
            .user_agent("fxc/0.1")
            .build()
            .map_err(FetchError::Request)?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Request)?;

        if !response.status().is_success() {
            return Err(Error::Fetch(FetchError::Status(response.status())));
        }

        Ok(response.text().await.map_err(FetchError::Request)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(FEED_PATH))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_fetch_returns_the_body_verbatim() {
        let body = "<Envelope><Cube/></Envelope>";
        let mock_server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(body)).await;

        let provider = EcbFeedProvider::new(&mock_server.uri());
        let text = provider.fetch_daily().await.unwrap();
        assert_eq!(text, body);
    }

    #[tokio::test]
    async fn test_server_error_is_a_fetch_failure() {
        let mock_server = create_mock_server(ResponseTemplate::new(500)).await;

        let provider = EcbFeedProvider::new(&mock_server.uri());
        let result = provider.fetch_daily().await;

        assert!(matches!(
            result,
            Err(Error::Fetch(FetchError::Status(status))) if status.as_u16() == 500
        ));
        assert_eq!(result.unwrap_err().exit_code(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_fetch_failure() {
        // Port 1 is never listening locally.
        let provider = EcbFeedProvider::new("http://127.0.0.1:1");
        let result = provider.fetch_daily().await;

        assert!(matches!(result, Err(Error::Fetch(FetchError::Request(_)))));
        assert_eq!(result.unwrap_err().exit_code(), 1);
    }

    #[tokio::test]
    async fn test_each_request_carries_a_fresh_query_string() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(FEED_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("doc"))
            .expect(2)
            .mount(&mock_server)
            .await;

        let provider = EcbFeedProvider::new(&mock_server.uri());
        provider.fetch_daily().await.unwrap();
        provider.fetch_daily().await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        let queries: Vec<_> = requests.iter().map(|r| r.url.query()).collect();
        assert!(queries.iter().all(|q| q.is_some_and(|q| !q.is_empty())));
        assert_ne!(queries[0], queries[1]);
    }
}
