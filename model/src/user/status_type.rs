use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatusType {
    Online,
    Dnd,
    Idle,
    Invisible,
    Offline,
}

impl StatusType {
    /// Invisible users are reported to everyone else as offline.
    pub fn is_visible(&self) -> bool {
        !matches!(self, StatusType::Offline | StatusType::Invisible)
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusType::Online => "online",
            StatusType::Dnd => "dnd",
            StatusType::Idle => "idle",
            StatusType::Invisible => "invisible",
            StatusType::Offline => "offline",
        };

        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let status: StatusType = serde_json::from_str(r#""dnd""#).unwrap();
        assert_eq!(status, StatusType::Dnd);
        assert_eq!(status.to_string(), "dnd");
        assert!(serde_json::from_str::<StatusType>(r#""away""#).is_err());
    }
}
