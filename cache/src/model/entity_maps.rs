use crate::model::{CachedMember, CachedPresence};
use dashmap::DashMap;
use model::guild::Member;
use model::user::{PresenceUpdate, User};
use model::Snowflake;
use std::iter::FromIterator;
use std::ops::Deref;
use std::sync::Arc;

pub trait EntityMap {
    type Entity;

    fn new() -> Self;
    fn from_vec(entities: Vec<Self::Entity>) -> Self;
}

// ========================
// MemberMap
// ========================
pub struct MemberMap(DashMap<Snowflake, CachedMember>);

impl MemberMap {
    pub fn get_converted(&self, user: User) -> Option<Member> {
        self.0
            .get(&user.id)
            .map(|member| member.value().clone().into_member(user))
    }

    pub fn merge(&self, members: Vec<Member>) {
        for (id, member) in keyed_members(members) {
            self.0.insert(id, member);
        }
    }
}

fn keyed_members(members: Vec<Member>) -> impl Iterator<Item = (Snowflake, CachedMember)> {
    members.into_iter().filter_map(|member| {
        let id = member.user_id()?;
        Some((id, CachedMember::from(member)))
    })
}

impl EntityMap for MemberMap {
    type Entity = Member;

    fn new() -> Self {
        Self(DashMap::new())
    }

    fn from_vec(members: Vec<Member>) -> Self {
        keyed_members(members).collect()
    }
}

impl Deref for MemberMap {
    type Target = DashMap<Snowflake, CachedMember>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<(Snowflake, CachedMember)> for MemberMap {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (Snowflake, CachedMember)>,
    {
        Self(DashMap::from_iter(iter))
    }
}

// ========================
// PresenceMap
// ========================
pub struct PresenceMap(DashMap<Snowflake, CachedPresence>);

impl PresenceMap {
    pub fn get_converted(&self, user_id: Snowflake, guild_id: Snowflake) -> Option<PresenceUpdate> {
        self.0
            .get(&user_id)
            .map(|presence| presence.value().clone().into_presence(user_id, guild_id))
    }

    pub fn get_all_converted(&self, guild_id: Snowflake) -> Vec<PresenceUpdate> {
        self.0
            .iter()
            .map(|presence| {
                presence
                    .value()
                    .clone()
                    .into_presence(*presence.key(), guild_id)
            })
            .collect()
    }

    pub fn merge(&self, presences: Vec<PresenceUpdate>) {
        for (id, presence) in keyed_presences(presences) {
            self.0.insert(id, presence);
        }
    }
}

fn keyed_presences(
    presences: Vec<PresenceUpdate>,
) -> impl Iterator<Item = (Snowflake, CachedPresence)> {
    presences.into_iter().filter_map(|presence| {
        let id = presence.user_id()?;
        Some((id, CachedPresence::from(presence)))
    })
}

impl EntityMap for PresenceMap {
    type Entity = PresenceUpdate;

    fn new() -> Self {
        Self(DashMap::new())
    }

    fn from_vec(presences: Vec<PresenceUpdate>) -> Self {
        keyed_presences(presences).collect()
    }
}

impl Deref for PresenceMap {
    type Target = DashMap<Snowflake, CachedPresence>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<(Snowflake, CachedPresence)> for PresenceMap {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (Snowflake, CachedPresence)>,
    {
        Self(DashMap::from_iter(iter))
    }
}

// ========================
// UserMap
// ========================
// Users are shared rather than converted so that callers can tell the cached
// instance apart from copies.
#[derive(Clone, Debug)]
pub struct UserMap(DashMap<Snowflake, Arc<User>>);

impl UserMap {
    pub fn get_shared(&self, id: Snowflake) -> Option<Arc<User>> {
        self.0.get(&id).map(|user| Arc::clone(user.value()))
    }

    pub fn get_converted(&self, id: Snowflake) -> Option<User> {
        self.0.get(&id).map(|user| User::clone(user.value()))
    }
}

impl EntityMap for UserMap {
    type Entity = User;

    fn new() -> Self {
        Self(DashMap::new())
    }

    fn from_vec(users: Vec<User>) -> Self {
        users
            .into_iter()
            .map(|user| (user.id, Arc::new(user)))
            .collect()
    }
}

impl Deref for UserMap {
    type Target = DashMap<Snowflake, Arc<User>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<(Snowflake, Arc<User>)> for UserMap {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (Snowflake, Arc<User>)>,
    {
        Self(DashMap::from_iter(iter))
    }
}
