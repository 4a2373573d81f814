/// Selects which stores a cache keeps. Also passed to `Cache::get_guild` to
/// select which collections are attached to the returned guild.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub users: bool,
    pub guilds: bool,
    pub members: bool,
    pub presences: bool,
}

impl Options {
    pub fn new(users: bool, guilds: bool, members: bool, presences: bool) -> Options {
        Options {
            users,
            guilds,
            members,
            presences,
        }
    }

    /// The guild record alone, without members or presences attached.
    pub fn guild_only() -> Options {
        Options::new(false, true, false, false)
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            users: true,
            guilds: true,
            members: true,
            presences: true,
        }
    }
}
