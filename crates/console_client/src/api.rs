use std::time::Duration;

use console_logging::console_debug;
use reqwest::Response;
use serde::de::DeserializeOwned;
use url::Url;

use crate::types::{
    AddDomainRequest, CrawlRequest, DomainsResponse, ErrorBody, MessageResponse, SearchResponse,
};
use crate::{ApiError, ApiStats, FailureKind, SearchHit};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Root of the backend API; endpoint paths are appended to it.
    pub base_url: String,
    pub connect_timeout: Option<Duration>,
    /// `None` leaves the HTTP client's default in place.
    pub request_timeout: Option<Duration>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// The backend operations the console consumes.
#[async_trait::async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchHit>, ApiError>;
    async fn domains(&self) -> Result<Vec<String>, ApiError>;
    /// Registers a seed domain and returns the server's confirmation message.
    async fn add_domain(&self, domain: &str) -> Result<String, ApiError>;
    /// Hands URLs to the crawler. Success means the backend accepted them.
    async fn crawl(&self, urls: &[String]) -> Result<String, ApiError>;
    async fn stats(&self) -> Result<ApiStats, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSearchApi {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestSearchApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Url::parse(&format!("{}/{path}", self.base_url))
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl SearchApi for ReqwestSearchApi {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchHit>, ApiError> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(self.endpoint("search")?)
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: SearchResponse = read_json(response, "Search failed").await?;
        console_debug!("search q={:?} returned {} hits", query, body.results.len());
        Ok(body.results)
    }

    async fn domains(&self) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("domains")?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: DomainsResponse = read_json(response, "Failed to load domains").await?;
        Ok(body.domains)
    }

    async fn add_domain(&self, domain: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoint("domains")?)
            .json(&AddDomainRequest { domain })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: MessageResponse = read_json(response, "Failed to add domain").await?;
        Ok(body.message)
    }

    async fn crawl(&self, urls: &[String]) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoint("crawl")?)
            .json(&CrawlRequest { urls })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body: MessageResponse = read_json(response, "Crawl failed").await?;
        Ok(body.message)
    }

    async fn stats(&self) -> Result<ApiStats, ApiError> {
        let response = self
            .client
            .get(self.endpoint("stats")?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response, "Failed to load stats").await
    }
}

/// Any non-2xx status is a failure; its JSON `error` field becomes the message when present.
async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_reqwest_error)?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::new(
            FailureKind::HttpStatus(status.as_u16()),
            message,
        ));
    }

    serde_json::from_slice(&body)
        .map_err(|err| ApiError::new(FailureKind::InvalidBody, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
