use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Network,
    InvalidJson,
    InvalidEndpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ListCampaigns,
    CreateCampaign,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::ListCampaigns => "list_campaigns",
            Operation::CreateCampaign => "create_campaign",
        }
    }
}

/// A failed operation as reported to observers of the page.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{operation:?} failed ({kind:?}): {message}")]
pub struct OperationFailure {
    pub operation: Operation,
    pub kind: FailureKind,
    pub message: String,
}

impl OperationFailure {
    pub fn new(operation: Operation, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
        }
    }
}
