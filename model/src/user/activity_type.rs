use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize_repr, Deserialize_repr, Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ActivityType {
    Game = 0,
    Streaming = 1,
    Listening = 2,
    Watching = 3,
    Custom = 4,
    Competing = 5,
}

impl ActivityType {
    /// Verb used when rendering the activity, e.g. "Listening to Spotify".
    pub fn verb(&self) -> &'static str {
        match self {
            ActivityType::Game => "Playing",
            ActivityType::Streaming => "Streaming",
            ActivityType::Listening => "Listening to",
            ActivityType::Watching => "Watching",
            ActivityType::Custom => "",
            ActivityType::Competing => "Competing in",
        }
    }
}

impl Default for ActivityType {
    fn default() -> Self {
        ActivityType::Game
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_repr_rejected() {
        assert!(serde_json::from_str::<ActivityType>("9").is_err());
        assert_eq!(
            serde_json::from_str::<ActivityType>("2").unwrap(),
            ActivityType::Listening
        );
    }
}
