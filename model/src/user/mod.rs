mod activity;
pub use activity::Activity;

mod activity_type;
pub use activity_type::ActivityType;

mod timestamps;
pub use timestamps::Timestamps;

mod status_type;
pub use status_type::StatusType;

mod activity_emoji;
pub use activity_emoji::ActivityEmoji;

mod party;
pub use party::Party;

mod assets;
pub use assets::Assets;

mod secrets;
pub use secrets::Secrets;

mod user;
pub use user::User;

mod partial_user;
pub use partial_user::PartialUser;

mod premium_type;
pub use premium_type::PremiumType;

mod presence_update;
pub use presence_update::PresenceUpdate;

mod client_status;
pub use client_status::ClientStatus;
