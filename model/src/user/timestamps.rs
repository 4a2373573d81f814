use serde::{Deserialize, Serialize};

/// Unix millisecond bounds of an activity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Timestamps {
    pub start: Option<u64>,
    pub end: Option<u64>,
}
