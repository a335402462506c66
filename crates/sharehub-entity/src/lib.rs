//! # sharehub-entity
//!
//! Domain models for the ShareHub client. Resources are owned by the
//! backend and only ever read here; user identities are derived from the
//! bearer token. All models derive `Debug`, `Clone`, `Serialize` and
//! `Deserialize`.

pub mod resource;
pub mod user;

pub use resource::{CategoryGroup, CategoryRef, OwnerRef, Resource};
pub use user::UserIdentity;
