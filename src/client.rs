use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::config::ClientConfig;
use crate::error::AvailabilityError;
use crate::models::availability::{AvailabilityQuery, AvailabilityResponse};

/// Anything that can answer an availability query.
#[async_trait]
pub trait AvailabilityService: Send + Sync {
    async fn search(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<AvailabilityResponse, AvailabilityError>;
}

/// Talks to `POST /search-availability-json`.
#[derive(Debug, Clone)]
pub struct HttpAvailabilityClient {
    http: Client,
    endpoint: Url,
}

impl HttpAvailabilityClient {
    pub fn new(config: &ClientConfig) -> Result<Self, AvailabilityError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        let endpoint = config.search_endpoint()?;

        Ok(HttpAvailabilityClient { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AvailabilityService for HttpAvailabilityClient {
    async fn search(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<AvailabilityResponse, AvailabilityError> {
        info!(
            "checking availability {} -> {} at {}",
            query.start_date, query.end_date, self.endpoint
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(query)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let parsed: AvailabilityResponse = serde_json::from_slice(&body)?;
        debug!("availability response: {:?}", parsed);

        Ok(parsed)
    }
}
