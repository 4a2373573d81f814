use super::{CachedGuild, EntityMap, MemberMap, PresenceMap};
use crate::Options;
use model::guild::Guild;

pub struct GuildState {
    pub guild: CachedGuild,
    pub members: MemberMap,
    pub presences: PresenceMap,
}

impl GuildState {
    /// Members and presences are only kept when their store is enabled in `opts`.
    pub fn new(guild: Guild, opts: &Options) -> Self {
        let cached = CachedGuild::from(&guild);

        let members = if opts.members && opts.users {
            MemberMap::from_vec(guild.members)
        } else {
            MemberMap::new()
        };

        let presences = if opts.presences {
            PresenceMap::from_vec(guild.presences)
        } else {
            PresenceMap::new()
        };

        Self {
            guild: cached,
            members,
            presences,
        }
    }

    /// Replaces the guild record and merges in any members or presences the
    /// payload carried. `GUILD_UPDATE` payloads carry neither, so existing
    /// entries are kept.
    pub fn update(&mut self, guild: Guild, opts: &Options) {
        self.guild = CachedGuild::from(&guild);

        if opts.members && opts.users {
            self.members.merge(guild.members);
        }

        if opts.presences {
            self.presences.merge(guild.presences);
        }
    }
}
