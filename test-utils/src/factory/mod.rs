//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories that need
//! a parent row take its key as an argument; `helpers` creates whole dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guild = factory::create_guild(&db).await?;
//! let user = factory::user::UserFactory::new(&db, guild.guild_id)
//!     .points(100)
//!     .build()
//!     .await?;
//! factory::create_point_source(&db, guild.guild_id, "split_high", 50).await?;
//! ```

pub mod guild;
pub mod guild_boss;
pub mod helpers;
pub mod point_source;
pub mod rsn;
pub mod run;
pub mod user;

pub use guild::create_guild;
pub use guild_boss::{create_guild_boss, create_guild_boss_with_pb};
pub use point_source::create_point_source;
pub use rsn::{create_rsn, create_rsn_with_wom_id};
pub use run::create_run;
pub use user::{create_user, create_user_with_points};
