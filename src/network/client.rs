//! HTTP client for the remote suggestion API

use super::RemoteSearch;
use crate::config::RemoteSettings;
use crate::error::SearchError;
use crate::results::SearchResult;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Error body some APIs send along with a failure status
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// API client answering `<base_url>/<search_path>?q=<query>`
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: Url,
    query_param: String,
}

impl ApiClient {
    /// Create a new API client with default settings
    pub fn new() -> anyhow::Result<Self> {
        Self::with_settings(&RemoteSettings::default())
    }

    /// Create a new API client with custom settings
    pub fn with_settings(settings: &RemoteSettings) -> anyhow::Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        if !settings.extra_headers.is_empty() {
            let mut headers = reqwest::header::HeaderMap::new();
            for (key, value) in &settings.extra_headers {
                headers.insert(
                    reqwest::header::HeaderName::from_bytes(key.as_bytes())?,
                    reqwest::header::HeaderValue::from_str(value)?,
                );
            }
            builder = builder.default_headers(headers);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: endpoint_url(&settings.base_url, &settings.search_path)?,
            query_param: settings.query_param.clone(),
        })
    }

    /// Full request URL for `query`
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(&self.query_param, query);
        url
    }
}

#[async_trait]
impl RemoteSearch for ApiClient {
    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = self.search_url(query);
        info!("Fetching suggestions from {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .map(|body| body.message);
            return Err(SearchError::status(status.as_u16(), message));
        }

        let results: Vec<SearchResult> = serde_json::from_str(&text)?;
        debug!("API returned {} results for '{}'", results.len(), query);
        Ok(results)
    }
}

/// Join the search path onto the base address, treating the base as a directory
fn endpoint_url(base_url: &str, search_path: &str) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(search_path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::assert_ok;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(server: &MockServer) -> RemoteSettings {
        RemoteSettings {
            base_url: format!("{}/api", server.uri()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_search_url_encodes_query() {
        let settings = RemoteSettings {
            base_url: "https://scores.example.com/api".to_string(),
            ..Default::default()
        };
        let client = ApiClient::with_settings(&settings).unwrap();

        assert_eq!(
            client.search_url("la liga&x").as_str(),
            "https://scores.example.com/api/competitions?q=la+liga%26x"
        );
    }

    #[tokio::test]
    async fn test_invalid_base_url() {
        let settings = RemoteSettings {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(ApiClient::with_settings(&settings).is_err());
    }

    #[tokio::test]
    async fn test_fetch_parses_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/competitions"))
            .and(query_param("q", "liga"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "La Liga", "details": "Spain"},
                {"id": "bl", "name": "Bundesliga"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::with_settings(&settings_for(&server)).unwrap();
        let results = assert_ok!(client.fetch("liga").await);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "1");
        assert_eq!(results[0].details.as_deref(), Some("Spain"));
        assert_eq!(results[1].id, "bl");
    }

    #[tokio::test]
    async fn test_fetch_sends_extra_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("x-client", "suggest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let mut settings = settings_for(&server);
        settings
            .extra_headers
            .insert("X-Client".to_string(), "suggest".to_string());
        let client = ApiClient::with_settings(&settings).unwrap();

        assert!(assert_ok!(client.fetch("x").await).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_uses_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(json!({"message": "maintenance"})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::with_settings(&settings_for(&server)).unwrap();
        let err = client.fetch("liga").await.unwrap_err();

        assert!(matches!(err, SearchError::Status { status: 503, .. }));
        assert_eq!(err.to_string(), "maintenance");
    }

    #[tokio::test]
    async fn test_fetch_error_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ApiClient::with_settings(&settings_for(&server)).unwrap();
        let err = client.fetch("liga").await.unwrap_err();

        assert_eq!(err.to_string(), "HTTP error: 404");
    }

    #[tokio::test]
    async fn test_fetch_rejects_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = ApiClient::with_settings(&settings_for(&server)).unwrap();
        let err = client.fetch("liga").await.unwrap_err();

        assert!(matches!(err, SearchError::Decode(_)));
    }
}
