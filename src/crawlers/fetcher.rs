use crate::error::{Result, ScrapeError};
use reqwest::Client;
use std::time::Duration;

/// Source of HTML documents for the collector and extractor
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Fetch a page and return its body
    ///
    /// Fails on transport errors, timeouts and non-success statuses.
    async fn fetch_html(&self, url: &str) -> Result<String>;
}

/// Plain HTTP GET fetcher with a per-request timeout
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("listing-harvest/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ScrapeError::Network)?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/collections/oahu"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        let body = fetcher
            .fetch_html(&format!("{}/collections/oahu", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_bad_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        let err = fetcher
            .fetch_html(&format!("{}/products/gone", server.uri()))
            .await
            .unwrap_err();
        match err {
            ScrapeError::Status { status, .. } => assert_eq!(status.as_u16(), 503),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::with_timeout(Duration::from_millis(100)).unwrap();
        let err = fetcher
            .fetch_html(&format!("{}/slow", server.uri()))
            .await
            .unwrap_err();
        assert!(err.is_network());
        assert!(matches!(err, ScrapeError::Network(ref e) if e.is_timeout()));
    }
}
