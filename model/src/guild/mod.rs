mod unavailable_guild;
pub use unavailable_guild::UnavailableGuild;

mod guild;
pub use guild::Guild;

mod member;
pub use member::Member;
