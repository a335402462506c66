//! # sharehub-auth
//!
//! Client-side session handling for ShareHub.
//!
//! ## Modules
//!
//! - `jwt`: bearer token payload decoding (no signature verification)
//! - `store`: file-backed and in-memory [`TokenStore`](sharehub_core::traits::TokenStore) implementations
//! - `session`: the session context owned by the application root
//! - `guard`: route definitions and the login redirect predicate
//! - `credentials`: login and registration form validation

pub mod credentials;
pub mod guard;
pub mod jwt;
pub mod session;
pub mod store;

pub use credentials::{LoginCredentials, Registration};
pub use guard::{Navigation, Route, RouteGuard};
pub use jwt::{TokenClaims, TokenDecoder};
pub use session::{Session, SessionContext};
pub use store::{FileTokenStore, MemoryTokenStore};
