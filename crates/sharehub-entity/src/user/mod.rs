//! User identity types.

pub mod identity;

pub use identity::UserIdentity;
