use crate::{Cache, CacheError, Options, Result};
use model::guild::{Guild, Member};
use model::user::{Activity, PresenceUpdate, User};
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

/// A user resolved for a presence event.
#[derive(Debug, Clone)]
pub enum ResolvedUser {
    /// The instance held by the cache.
    Cached(Arc<User>),
    /// Built from the event payload and not stored anywhere. Changes to it
    /// are not seen by the cache.
    Detached(User),
}

impl ResolvedUser {
    pub fn is_cached(&self) -> bool {
        matches!(self, ResolvedUser::Cached(_))
    }
}

impl Deref for ResolvedUser {
    type Target = User;

    fn deref(&self) -> &User {
        match self {
            ResolvedUser::Cached(user) => user.as_ref(),
            ResolvedUser::Detached(user) => user,
        }
    }
}

/// Resolves the entities a presence event refers to. Nothing is stored: every
/// accessor reads the cache again, so two calls may observe different states
/// if the cache is written to in between.
pub struct PresenceResolver<'a, C: Cache + ?Sized> {
    presence: &'a PresenceUpdate,
    cache: &'a C,
}

impl<'a, C: Cache + ?Sized> PresenceResolver<'a, C> {
    pub fn new(presence: &'a PresenceUpdate, cache: &'a C) -> Self {
        Self { presence, cache }
    }

    /// The guild the presence was sent for, without members or presences.
    pub fn guild(&self) -> Result<Guild> {
        self.guild_with(Options::guild_only())
    }

    pub fn guild_with(&self, with: Options) -> Result<Guild> {
        let guild_id = self
            .presence
            .guild_id
            .ok_or_else(|| CacheError::missing_field("PresenceUpdate", "guild_id"))?;

        self.cache
            .get_guild(guild_id, with)?
            .ok_or(CacheError::GuildNotFound(guild_id))
    }

    /// `None` when the payload has no user, the guild is not cached or the
    /// user is not a cached member of it.
    pub fn member(&self) -> Result<Option<Member>> {
        let user_id = match self.presence.user_id() {
            Some(id) => id,
            None => return Ok(None),
        };

        let guild = match self.guild() {
            Ok(guild) => guild,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        self.cache.get_member(user_id, guild.id)
    }

    /// Falls back to a detached user built from the payload when the user is
    /// not cached, or when the cache does not keep users.
    pub fn user(&self) -> Result<ResolvedUser> {
        let partial = self
            .presence
            .user
            .as_ref()
            .ok_or_else(|| CacheError::missing_field("PresenceUpdate", "user"))?;

        match self.cache.get_user(partial.id) {
            Ok(Some(user)) => Ok(ResolvedUser::Cached(user)),
            Ok(None) | Err(CacheError::StoreDisabled) => {
                debug!(user_id = %partial.id, "User not cached, building from payload");
                Ok(ResolvedUser::Detached(partial.to_user()))
            }
            Err(e) => Err(e),
        }
    }

    /// Fresh copies of the payload's activities, in payload order.
    pub fn activities(&self) -> Vec<Activity> {
        self.presence.activities.clone()
    }

    /// The primary activity: the first of `activities()`.
    pub fn game(&self) -> Option<Activity> {
        self.presence.game().cloned()
    }
}
