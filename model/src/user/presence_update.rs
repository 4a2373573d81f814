use serde::{Deserialize, Serialize};

use super::{Activity, ClientStatus, PartialUser, StatusType};
use crate::Snowflake;

/// Payload of the `PRESENCE_UPDATE` gateway event, also embedded in guild
/// create payloads.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawPresenceUpdate")]
pub struct PresenceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PartialUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    pub status: StatusType,
    pub activities: Vec<Activity>,
    pub client_status: ClientStatus,
}

impl PresenceUpdate {
    pub fn user_id(&self) -> Option<Snowflake> {
        self.user.as_ref().map(|user| user.id)
    }

    /// The primary activity, always the first entry of `activities`.
    pub fn game(&self) -> Option<&Activity> {
        self.activities.first()
    }
}

// Older gateway versions sent a single `game` instead of `activities`.
#[derive(Deserialize)]
struct RawPresenceUpdate {
    user: Option<PartialUser>,
    guild_id: Option<Snowflake>,
    status: StatusType,
    activities: Option<Vec<Activity>>,
    game: Option<Activity>,
    #[serde(default)]
    client_status: ClientStatus,
}

impl From<RawPresenceUpdate> for PresenceUpdate {
    fn from(raw: RawPresenceUpdate) -> Self {
        let activities = match (raw.activities, raw.game) {
            (Some(activities), _) => activities,
            (None, Some(game)) => vec![game],
            (None, None) => Vec::new(),
        };

        PresenceUpdate {
            user: raw.user,
            guild_id: raw.guild_id,
            status: raw.status,
            activities,
            client_status: raw.client_status,
        }
    }
}
