use serde::{Deserialize, Serialize};

use crate::Snowflake;

/// Emoji shown next to a custom status. `id` is only set for guild emojis.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivityEmoji {
    pub name: String,
    pub id: Option<Snowflake>,
    pub animated: Option<bool>,
}
