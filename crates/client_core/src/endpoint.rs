//! Validated address of the campaigns collection.

use std::{fmt, str::FromStr};

use url::Url;

use crate::error::CampaignClientError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    pub fn parse(raw: &str) -> Result<Self, CampaignClientError> {
        let raw = raw.trim();
        let url = Url::parse(raw).map_err(|err| CampaignClientError::InvalidEndpoint {
            raw: raw.to_string(),
            reason: err.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(CampaignClientError::InvalidEndpoint {
                    raw: raw.to_string(),
                    reason: format!("unsupported scheme '{other}'"),
                })
            }
        }

        if url.host_str().is_none() {
            return Err(CampaignClientError::InvalidEndpoint {
                raw: raw.to_string(),
                reason: "missing host".to_string(),
            });
        }

        Ok(Self(url))
    }

    pub fn url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Endpoint {
    type Err = CampaignClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
