use super::{Options, Result};

use model::guild::{Guild, Member};
use model::user::{PresenceUpdate, User};
use model::Snowflake;
use std::sync::Arc;

pub trait Cache: Send + Sync + 'static {
    fn options(&self) -> Options;

    fn store_guild(&self, guild: Guild) -> Result<()>;
    fn store_guilds(&self, guilds: Vec<Guild>) -> Result<()>;
    fn get_guild(&self, id: Snowflake, with: Options) -> Result<Option<Guild>>;
    fn delete_guild(&self, id: Snowflake) -> Result<()>;
    fn get_guild_count(&self) -> Result<usize>;

    fn store_user(&self, user: User) -> Result<()>;
    fn store_users(&self, users: Vec<User>) -> Result<()>;
    /// Returns the cached instance itself, not a copy.
    fn get_user(&self, id: Snowflake) -> Result<Option<Arc<User>>>;
    fn delete_user(&self, id: Snowflake) -> Result<()>;

    fn store_member(&self, member: Member, guild_id: Snowflake) -> Result<()>;
    fn store_members(&self, members: Vec<Member>, guild_id: Snowflake) -> Result<()>;
    fn get_member(&self, user_id: Snowflake, guild_id: Snowflake) -> Result<Option<Member>>;
    fn delete_member(&self, user_id: Snowflake, guild_id: Snowflake) -> Result<()>;

    fn store_presence(&self, presence: PresenceUpdate) -> Result<()>;
    fn get_presence(
        &self,
        user_id: Snowflake,
        guild_id: Snowflake,
    ) -> Result<Option<PresenceUpdate>>;
}
