use async_trait::async_trait;
use reqwest::Client;
use shared::domain::Campaign;
use tracing::{debug, warn};

pub mod endpoint;
pub mod error;
pub mod form;
mod page;
pub mod render;
pub mod view;

pub use endpoint::Endpoint;
pub use error::CampaignClientError;
pub use form::CampaignForm;
pub use page::{CampaignPage, PageEvent};
pub use view::Container;

/// Remote side of the campaigns page.
#[async_trait]
pub trait CampaignApi: Send + Sync {
    async fn list_campaigns(&self) -> error::Result<Vec<Campaign>>;
    async fn create_campaign(&self, campaign: &Campaign) -> error::Result<()>;
}

/// [`CampaignApi`] over plain HTTP + JSON.
///
/// Both operations target the same endpoint. Response status codes are
/// logged but never turned into errors; only transport failures and
/// undecodable list bodies are.
pub struct HttpCampaignApi {
    http: Client,
    endpoint: Endpoint,
}

impl HttpCampaignApi {
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Endpoint) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn network_error(&self, source: reqwest::Error) -> CampaignClientError {
        CampaignClientError::Network {
            url: self.endpoint.to_string(),
            source,
        }
    }
}

#[async_trait]
impl CampaignApi for HttpCampaignApi {
    async fn list_campaigns(&self) -> error::Result<Vec<Campaign>> {
        debug!(endpoint = %self.endpoint, "GET campaigns");
        let res = self
            .http
            .get(self.endpoint.url().clone())
            .send()
            .await
            .map_err(|err| self.network_error(err))?;

        let status = res.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, %status, "campaign list answered with non-success status");
        }

        let body = res.bytes().await.map_err(|err| self.network_error(err))?;
        serde_json::from_slice(&body).map_err(|source| CampaignClientError::InvalidJson {
            url: self.endpoint.to_string(),
            source,
        })
    }

    async fn create_campaign(&self, campaign: &Campaign) -> error::Result<()> {
        debug!(endpoint = %self.endpoint, title = %campaign.title, "POST campaign");
        let res = self
            .http
            .post(self.endpoint.url().clone())
            .json(campaign)
            .send()
            .await
            .map_err(|err| self.network_error(err))?;

        let status = res.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, %status, "campaign create answered with non-success status");
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
