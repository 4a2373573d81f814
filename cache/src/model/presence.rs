use model::user::{Activity, ClientStatus, PartialUser, PresenceUpdate, StatusType};
use model::Snowflake;

/// Latest presence of a member. The user and guild are the map keys.
#[derive(Clone, Debug)]
pub struct CachedPresence {
    pub status: StatusType,
    pub activities: Vec<Activity>,
    pub client_status: ClientStatus,
}

impl CachedPresence {
    pub fn into_presence(self, user_id: Snowflake, guild_id: Snowflake) -> PresenceUpdate {
        PresenceUpdate {
            user: Some(PartialUser::new(user_id)),
            guild_id: Some(guild_id),
            status: self.status,
            activities: self.activities,
            client_status: self.client_status,
        }
    }
}

impl From<PresenceUpdate> for CachedPresence {
    fn from(other: PresenceUpdate) -> Self {
        Self {
            status: other.status,
            activities: other.activities,
            client_status: other.client_status,
        }
    }
}
