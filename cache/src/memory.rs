use crate::model::{CachedMember, CachedPresence, EntityMap, GuildState, UserMap};
use crate::{Cache, CacheError, Options, Result};
use dashmap::mapref::entry::Entry;
use dashmap::mapref::one::RefMut;
use dashmap::DashMap;
use model::guild::{Guild, Member};
use model::user::{PartialUser, PresenceUpdate, User};
use model::Snowflake;
use std::sync::Arc;
use tracing::{debug, trace};

pub struct MemoryCache {
    opts: Options,
    guilds: DashMap<Snowflake, GuildState>,
    users: UserMap,
}

impl MemoryCache {
    pub fn new(opts: Options) -> Self {
        MemoryCache {
            opts,
            guilds: DashMap::new(),
            users: UserMap::new(),
        }
    }

    fn guild_mut(&self, id: Snowflake) -> Option<RefMut<Snowflake, GuildState>> {
        self.guilds.get_mut(&id)
    }

    /// Applies the fields a presence carried to the global user entry. A user
    /// we have never seen is only inserted when the payload is complete.
    fn refresh_user(&self, partial: &PartialUser) {
        if !self.opts.users || *partial == PartialUser::new(partial.id) {
            return;
        }

        match self.users.entry(partial.id) {
            Entry::Occupied(mut entry) => {
                let mut user = User::clone(entry.get());
                partial.merge_into(&mut user);
                entry.insert(Arc::new(user));
            }
            Entry::Vacant(entry) => {
                if partial.is_complete() {
                    entry.insert(Arc::new(partial.to_user()));
                }
            }
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        MemoryCache::new(Options::default())
    }
}

impl Cache for MemoryCache {
    fn options(&self) -> Options {
        self.opts
    }

    fn store_guild(&self, guild: Guild) -> Result<()> {
        if !self.opts.guilds {
            return Ok(());
        }

        if self.opts.users {
            for user in guild.members.iter().filter_map(|m| m.user.as_ref()) {
                self.users.insert(user.id, Arc::new(user.clone()));
            }
        }

        for user in guild.presences.iter().filter_map(|p| p.user.as_ref()) {
            self.refresh_user(user);
        }

        match self.guilds.entry(guild.id) {
            Entry::Occupied(mut entry) => entry.get_mut().update(guild, &self.opts),
            Entry::Vacant(entry) => {
                entry.insert(GuildState::new(guild, &self.opts));
            }
        }

        Ok(())
    }

    fn store_guilds(&self, guilds: Vec<Guild>) -> Result<()> {
        if !self.opts.guilds {
            return Ok(());
        }

        guilds.into_iter().try_for_each(|g| self.store_guild(g))
    }

    fn get_guild(&self, id: Snowflake, with: Options) -> Result<Option<Guild>> {
        if !self.opts.guilds {
            return CacheError::StoreDisabled.into();
        }

        let state = match self.guilds.get(&id) {
            Some(v) => v,
            None => return Ok(None),
        };

        // Use with caution! Converts every member of the guild.
        let members = if with.members && self.opts.members && self.opts.users {
            state
                .members
                .iter()
                .filter_map(|pair| {
                    self.users
                        .get_converted(*pair.key())
                        .map(|user| pair.value().clone().into_member(user))
                })
                .collect()
        } else {
            vec![]
        };

        let presences = if with.presences && self.opts.presences {
            state.presences.get_all_converted(id)
        } else {
            vec![]
        };

        Ok(Some(state.guild.clone().into_guild(id, members, presences)))
    }

    fn delete_guild(&self, id: Snowflake) -> Result<()> {
        if !self.opts.guilds {
            return Ok(());
        }

        self.guilds.remove(&id);
        Ok(())
    }

    fn get_guild_count(&self) -> Result<usize> {
        Ok(self.guilds.len())
    }

    fn store_user(&self, user: User) -> Result<()> {
        if !self.opts.users {
            return Ok(());
        }

        self.users.insert(user.id, Arc::new(user));
        Ok(())
    }

    fn store_users(&self, users: Vec<User>) -> Result<()> {
        if !self.opts.users {
            return Ok(());
        }

        users.into_iter().try_for_each(|u| self.store_user(u))
    }

    fn get_user(&self, id: Snowflake) -> Result<Option<Arc<User>>> {
        if !self.opts.users {
            return CacheError::StoreDisabled.into();
        }

        Ok(self.users.get_shared(id))
    }

    fn delete_user(&self, id: Snowflake) -> Result<()> {
        if !self.opts.users {
            return Ok(());
        }

        self.users.remove(&id);
        Ok(())
    }

    fn store_member(&self, member: Member, guild_id: Snowflake) -> Result<()> {
        if !self.opts.members || !self.opts.users {
            return Ok(());
        }

        let user = match &member.user {
            Some(user) => user.clone(),
            None => return CacheError::MemberMissingUser.into(),
        };

        let user_id = user.id;
        self.store_user(user)?;

        match self.guild_mut(guild_id) {
            Some(guild) => {
                guild.members.insert(user_id, CachedMember::from(member));
            }
            None => debug!(%guild_id, %user_id, "Dropping member of uncached guild"),
        }

        Ok(())
    }

    fn store_members(&self, members: Vec<Member>, guild_id: Snowflake) -> Result<()> {
        if !self.opts.members || !self.opts.users {
            return Ok(());
        }

        members
            .into_iter()
            .filter(|m| m.user.is_some())
            .try_for_each(|m| self.store_member(m, guild_id))
    }

    fn get_member(&self, user_id: Snowflake, guild_id: Snowflake) -> Result<Option<Member>> {
        if !self.opts.members || !self.opts.users {
            return CacheError::StoreDisabled.into();
        }

        let user = match self.users.get_converted(user_id) {
            Some(u) => u,
            None => return Ok(None),
        };

        Ok(self
            .guilds
            .get(&guild_id)
            .and_then(|guild| guild.members.get_converted(user)))
    }

    fn delete_member(&self, user_id: Snowflake, guild_id: Snowflake) -> Result<()> {
        if !self.opts.members {
            return Ok(());
        }

        if let Some(guild) = self.guild_mut(guild_id) {
            guild.members.remove(&user_id);
            guild.presences.remove(&user_id);
        }

        Ok(())
    }

    fn store_presence(&self, presence: PresenceUpdate) -> Result<()> {
        if !self.opts.presences {
            return Ok(());
        }

        let user = presence
            .user
            .as_ref()
            .ok_or_else(|| CacheError::missing_field("PresenceUpdate", "user"))?;
        let guild_id = presence
            .guild_id
            .ok_or_else(|| CacheError::missing_field("PresenceUpdate", "guild_id"))?;

        let user_id = user.id;
        self.refresh_user(user);

        let guild = self
            .guild_mut(guild_id)
            .ok_or(CacheError::GuildNotFound(guild_id))?;

        trace!(%guild_id, %user_id, status = %presence.status, "Storing presence");
        guild
            .presences
            .insert(user_id, CachedPresence::from(presence));

        Ok(())
    }

    fn get_presence(
        &self,
        user_id: Snowflake,
        guild_id: Snowflake,
    ) -> Result<Option<PresenceUpdate>> {
        if !self.opts.presences {
            return CacheError::StoreDisabled.into();
        }

        Ok(self
            .guilds
            .get(&guild_id)
            .and_then(|guild| guild.presences.get_converted(user_id, guild_id)))
    }
}
