use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::StatusCode;

use crate::{FailureKind, SearchError, SearchPage, SearchRequest};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Provider API root, overridable so tests can point at a mock server.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// The provider rejects requests without a User-Agent.
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: "repo-scout/0.1".to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, SearchError>;
}

#[derive(Debug, Clone)]
pub struct GithubSearchClient {
    client: reqwest::Client,
    settings: ClientSettings,
}

impl GithubSearchClient {
    pub fn new(settings: ClientSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|err| SearchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, settings })
    }
}

#[async_trait::async_trait]
impl SearchClient for GithubSearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, SearchError> {
        let url = format!("{}/search/repositories", self.settings.base_url);
        let params = [
            ("q", request.query.clone()),
            ("sort", request.sort.clone()),
            ("order", request.order.clone()),
            ("page", request.page.to_string()),
            ("per_page", request.per_page.to_string()),
        ];
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .query(&params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(SearchError::new(
                FailureKind::RateLimited,
                status.to_string(),
            ));
        }
        if !status.is_success() {
            return Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response
            .json::<SearchPage>()
            .await
            .map_err(|err| SearchError::new(FailureKind::InvalidResponse, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(FailureKind::Timeout, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
