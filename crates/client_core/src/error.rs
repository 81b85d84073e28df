use shared::error::FailureKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CampaignClientError {
    #[error("invalid campaigns endpoint '{raw}': {reason}")]
    InvalidEndpoint { raw: String, reason: String },
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response from {url} is not a campaign list: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CampaignClientError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CampaignClientError::InvalidEndpoint { .. } => FailureKind::InvalidEndpoint,
            CampaignClientError::Network { .. } => FailureKind::Network,
            CampaignClientError::InvalidJson { .. } => FailureKind::InvalidJson,
        }
    }
}

pub type Result<T> = std::result::Result<T, CampaignClientError>;
