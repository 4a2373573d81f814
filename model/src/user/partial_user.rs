use serde::{Deserialize, Serialize};

use super::User;
use crate::{Discriminator, ImageHash, Snowflake};

/// The user object carried by presence events. Only `id` is guaranteed, the
/// remaining fields are present when they changed or on the first presence
/// sent for a user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PartialUser {
    pub id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<u64>,
}

impl PartialUser {
    pub fn new(id: Snowflake) -> PartialUser {
        PartialUser {
            id,
            username: None,
            discriminator: None,
            global_name: None,
            avatar: None,
            bot: None,
            public_flags: None,
        }
    }

    /// Whether the payload carried enough to stand in for a full user object.
    pub fn is_complete(&self) -> bool {
        self.username.is_some()
    }

    /// Builds a user from whatever the payload carried. Missing fields take
    /// their defaults, so the result is only as accurate as the payload.
    pub fn to_user(&self) -> User {
        User {
            id: self.id,
            username: self.username.clone().unwrap_or_default(),
            discriminator: self.discriminator.unwrap_or_default(),
            global_name: self.global_name.clone(),
            avatar: self.avatar,
            bot: self.bot.unwrap_or(false),
            system: false,
            mfa_enabled: None,
            locale: None,
            verified: None,
            email: None,
            flags: None,
            premium_type: None,
            public_flags: self.public_flags,
        }
    }

    /// Applies the fields carried by this payload on top of `user`.
    pub fn merge_into(&self, user: &mut User) {
        if let Some(username) = &self.username {
            user.username = username.clone();
        }

        if let Some(discriminator) = self.discriminator {
            user.discriminator = discriminator;
        }

        if self.global_name.is_some() {
            user.global_name = self.global_name.clone();
        }

        if self.avatar.is_some() {
            user.avatar = self.avatar;
        }

        if let Some(bot) = self.bot {
            user.bot = bot;
        }

        if self.public_flags.is_some() {
            user.public_flags = self.public_flags;
        }
    }
}

impl From<User> for PartialUser {
    fn from(user: User) -> Self {
        PartialUser {
            id: user.id,
            username: Some(user.username),
            discriminator: Some(user.discriminator),
            global_name: user.global_name,
            avatar: user.avatar,
            bot: Some(user.bot),
            public_flags: user.public_flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_only() {
        let user: PartialUser = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert_eq!(user, PartialUser::new(Snowflake(1)));
        assert!(!user.is_complete());

        let full = user.to_user();
        assert_eq!(full.id, Snowflake(1));
        assert_eq!(full.username, "");
        assert!(!full.bot);
    }

    #[test]
    fn test_merge_keeps_missing_fields() {
        let mut user = PartialUser {
            username: Some("ryan".to_string()),
            discriminator: Some(Discriminator(1)),
            ..PartialUser::new(Snowflake(5))
        }
        .to_user();

        let update = PartialUser {
            bot: Some(true),
            ..PartialUser::new(Snowflake(5))
        };
        update.merge_into(&mut user);

        assert_eq!(user.username, "ryan");
        assert_eq!(user.discriminator, Discriminator(1));
        assert!(user.bot);
    }
}
