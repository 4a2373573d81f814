use serde::{Deserialize, Serialize};

use crate::Snowflake;

/// Sent in place of a guild during an outage, or on `GUILD_DELETE`. An absent
/// `unavailable` flag on delete means the bot was removed from the guild.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UnavailableGuild {
    pub id: Snowflake,
    pub unavailable: Option<bool>,
}

impl UnavailableGuild {
    pub fn was_removed(&self) -> bool {
        !self.unavailable.unwrap_or(false)
    }
}
