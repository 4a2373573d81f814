use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;
use chrono::{DateTime, Utc};
use model::guild::{Guild, Member, UnavailableGuild};
use model::user::{PresenceUpdate, User};
use model::Snowflake;

/// Dispatch events that change what the cache holds.
#[derive(Debug)]
pub enum Event {
    GuildCreate(Guild),
    GuildUpdate(Guild),
    GuildDelete(UnavailableGuild),
    GuildMemberAdd(GuildMemberAdd),
    GuildMemberRemove(GuildMemberRemove),
    GuildMemberUpdate(GuildMemberUpdate),
    GuildMembersChunk(GuildMembersChunk),
    PresenceUpdate(PresenceUpdate),
    UserUpdate(User),
}

impl Event {
    /// `None` when `event_type` is not one of the tracked events.
    pub fn parse(event_type: &str, data: Value) -> Result<Option<Event>> {
        let event = match event_type {
            "GUILD_CREATE" => Event::GuildCreate(serde_json::from_value(data)?),
            "GUILD_UPDATE" => Event::GuildUpdate(serde_json::from_value(data)?),
            "GUILD_DELETE" => Event::GuildDelete(serde_json::from_value(data)?),
            "GUILD_MEMBER_ADD" => Event::GuildMemberAdd(serde_json::from_value(data)?),
            "GUILD_MEMBER_REMOVE" => Event::GuildMemberRemove(serde_json::from_value(data)?),
            "GUILD_MEMBER_UPDATE" => Event::GuildMemberUpdate(serde_json::from_value(data)?),
            "GUILD_MEMBERS_CHUNK" => Event::GuildMembersChunk(serde_json::from_value(data)?),
            "PRESENCE_UPDATE" => Event::PresenceUpdate(serde_json::from_value(data)?),
            "USER_UPDATE" => Event::UserUpdate(serde_json::from_value(data)?),
            _ => return Ok(None),
        };

        Ok(Some(event))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Event::GuildCreate(_) => "GUILD_CREATE",
            Event::GuildUpdate(_) => "GUILD_UPDATE",
            Event::GuildDelete(_) => "GUILD_DELETE",
            Event::GuildMemberAdd(_) => "GUILD_MEMBER_ADD",
            Event::GuildMemberRemove(_) => "GUILD_MEMBER_REMOVE",
            Event::GuildMemberUpdate(_) => "GUILD_MEMBER_UPDATE",
            Event::GuildMembersChunk(_) => "GUILD_MEMBERS_CHUNK",
            Event::PresenceUpdate(_) => "PRESENCE_UPDATE",
            Event::UserUpdate(_) => "USER_UPDATE",
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GuildMemberAdd {
    pub guild_id: Snowflake,
    #[serde(flatten)]
    pub member: Member,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GuildMemberRemove {
    pub guild_id: Snowflake,
    pub user: User,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GuildMemberUpdate {
    pub guild_id: Snowflake,
    pub roles: Vec<Snowflake>,
    pub user: User,
    pub nick: Option<Box<str>>,
    pub joined_at: DateTime<Utc>,
    pub premium_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pending: bool,
}

impl From<GuildMemberUpdate> for Member {
    fn from(ev: GuildMemberUpdate) -> Self {
        Member {
            user: Some(ev.user),
            nick: ev.nick,
            roles: ev.roles,
            joined_at: ev.joined_at,
            premium_since: ev.premium_since,
            deaf: false,
            mute: false,
            pending: ev.pending,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GuildMembersChunk {
    pub guild_id: Snowflake,
    pub members: Vec<Member>,
    pub chunk_index: u32,
    pub chunk_count: u32,
    pub not_found: Option<Vec<Snowflake>>,
    pub presences: Option<Vec<PresenceUpdate>>,
    pub nonce: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_presence_update() {
        let event = Event::parse(
            "PRESENCE_UPDATE",
            json!({
                "user": { "id": "1" },
                "guild_id": "10",
                "status": "online",
                "activities": [{ "name": "Chess", "type": 0 }],
                "client_status": { "desktop": "online" }
            }),
        )
        .unwrap()
        .unwrap();

        assert_eq!(event.name(), "PRESENCE_UPDATE");
        match event {
            Event::PresenceUpdate(presence) => {
                assert_eq!(presence.guild_id, Some(Snowflake(10)));
                assert_eq!(presence.activities.len(), 1);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_parse_member_add() {
        let event = Event::parse(
            "GUILD_MEMBER_ADD",
            json!({
                "guild_id": "10",
                "user": { "id": "2", "username": "new", "discriminator": "0", "avatar": null },
                "nick": null,
                "roles": [],
                "joined_at": "2022-02-02T02:02:02+00:00"
            }),
        )
        .unwrap()
        .unwrap();

        match event {
            Event::GuildMemberAdd(ev) => {
                assert_eq!(ev.guild_id, Snowflake(10));
                assert_eq!(ev.member.user_id(), Some(Snowflake(2)));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_parse_bad_payload() {
        assert!(Event::parse("PRESENCE_UPDATE", json!({ "status": "away" })).is_err());
    }

    #[test]
    fn test_parse_untracked() {
        assert!(Event::parse("MESSAGE_CREATE", json!({})).unwrap().is_none());
    }
}
