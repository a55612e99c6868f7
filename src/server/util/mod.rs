//! Request-level helpers shared by the controllers.

pub mod extract;
pub mod parse;
pub mod validate;
