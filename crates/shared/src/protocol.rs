use serde::{Deserialize, Serialize};

/// Address the client targets when nothing else is configured.
pub const DEFAULT_CAMPAIGNS_ENDPOINT: &str = "http://127.0.0.1:5000/campaigns";

/// Body the campaigns service answers a successful create with.
///
/// The client never reads it; it is kept so test backends speak the same
/// dialect as the real one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCampaignAck {
    pub message: String,
}

impl Default for CreateCampaignAck {
    fn default() -> Self {
        Self {
            message: "Campaign added successfully".into(),
        }
    }
}
