//! HTTP dispatch of search requests to the backend.

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::SubmissionError,
    protocol::{SearchAcknowledgement, SearchRequest},
};
use tracing::warn;
use url::Url;

#[async_trait]
pub trait SearchTransport: Send + Sync {
    /// Issues exactly one request. Implementations must not retry.
    async fn submit_search(
        &self,
        token: &str,
        request: &SearchRequest,
    ) -> Result<SearchAcknowledgement, SubmissionError>;
}

/// Appends `/search` to the backend base URL, tolerating a trailing slash.
pub fn search_endpoint(backend_url: &str) -> Result<Url, url::ParseError> {
    let base = backend_url.trim().trim_end_matches('/');
    Url::parse(&format!("{base}/search"))
}

pub struct HttpSearchTransport {
    http: Client,
    endpoint: Url,
}

impl HttpSearchTransport {
    pub fn new(backend_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::with_client(Client::new(), search_endpoint(backend_url)?))
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SearchTransport for HttpSearchTransport {
    async fn submit_search(
        &self,
        token: &str,
        request: &SearchRequest,
    ) -> Result<SearchAcknowledgement, SubmissionError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(|err| SubmissionError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::from_status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| SubmissionError::Network(err.to_string()))?;

        match serde_json::from_slice::<SearchAcknowledgement>(&body) {
            Ok(ack) => Ok(ack),
            Err(error) => {
                warn!(%error, status = status.as_u16(), "search acknowledgement body was not the expected JSON");
                Ok(SearchAcknowledgement::default())
            }
        }
    }
}
