mod guild;
pub use guild::CachedGuild;

mod entity_maps;
pub use entity_maps::*;

mod guild_state;
pub use guild_state::GuildState;

mod member;
pub use member::CachedMember;

mod presence;
pub use presence::CachedPresence;
