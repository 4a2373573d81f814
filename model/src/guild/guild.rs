use serde::{Deserialize, Serialize};

use super::Member;
use crate::user::PresenceUpdate;
use crate::{ImageHash, Snowflake};
use chrono::{DateTime, Utc};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Guild {
    pub id: Snowflake,
    pub name: Box<str>,
    pub icon: Option<ImageHash>,
    #[serde(serialize_with = "Snowflake::serialize_to_int")]
    pub owner_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub large: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<bool>,
    #[serde(default)]
    pub member_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Box<str>>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub presences: Vec<PresenceUpdate>,
}

impl Guild {
    pub fn member(&self, user_id: Snowflake) -> Option<&Member> {
        self.members
            .iter()
            .find(|member| member.user_id() == Some(user_id))
    }
}

impl PartialEq for Guild {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::StatusType;
    use serde_json::json;

    #[test]
    fn test_guild_create_payload() {
        let guild: Guild = serde_json::from_value(json!({
            "id": "10",
            "name": "chess club",
            "icon": null,
            "owner_id": "1",
            "member_count": 1,
            "members": [{
                "user": { "id": "1", "username": "ryan", "discriminator": "0001", "avatar": null },
                "roles": [],
                "joined_at": "2021-01-01T00:00:00+00:00"
            }],
            "presences": [{ "user": { "id": "1" }, "status": "online" }],
            "features": ["COMMUNITY"]
        }))
        .unwrap();

        assert_eq!(guild.id, Snowflake(10));
        assert!(guild.member(Snowflake(1)).is_some());
        assert!(guild.member(Snowflake(2)).is_none());
        // presences embedded in a guild payload omit guild_id
        assert_eq!(guild.presences[0].guild_id, None);
        assert_eq!(guild.presences[0].status, StatusType::Online);
    }
}
