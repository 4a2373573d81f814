use serde::{Deserialize, Serialize};

use super::StatusType;

/// Per-platform status. A platform is absent when the user has no active
/// session on it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ClientStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop: Option<StatusType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<StatusType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<StatusType>,
}
