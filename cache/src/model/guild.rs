use chrono::{DateTime, Utc};
use model::guild::{Guild, Member};
use model::user::PresenceUpdate;
use model::{ImageHash, Snowflake};

#[derive(Clone, Debug)]
pub struct CachedGuild {
    pub name: Box<str>,
    pub icon: Option<ImageHash>,
    pub owner_id: Snowflake,
    pub joined_at: Option<DateTime<Utc>>,
    pub large: bool,
    pub unavailable: bool,
    pub member_count: u32,
    pub description: Option<Box<str>>,
}

impl CachedGuild {
    pub fn into_guild(
        self,
        id: Snowflake,
        members: Vec<Member>,
        presences: Vec<PresenceUpdate>,
    ) -> Guild {
        Guild {
            id,
            name: self.name,
            icon: self.icon,
            owner_id: self.owner_id,
            joined_at: self.joined_at,
            large: self.large,
            unavailable: Some(self.unavailable),
            member_count: self.member_count,
            description: self.description,
            members,
            presences,
        }
    }
}

impl From<&Guild> for CachedGuild {
    fn from(other: &Guild) -> Self {
        Self {
            name: other.name.clone(),
            icon: other.icon,
            owner_id: other.owner_id,
            joined_at: other.joined_at,
            large: other.large,
            unavailable: other.unavailable.unwrap_or(false),
            member_count: other.member_count,
            description: other.description.clone(),
        }
    }
}
