pub use super::event::Entity as Event;
pub use super::guild::Entity as Guild;
pub use super::guild_boss::Entity as GuildBoss;
pub use super::participation::Entity as Participation;
pub use super::point_source::Entity as PointSource;
pub use super::rsn::Entity as Rsn;
pub use super::run::Entity as Run;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
