//! Client session state and its lifecycle.

pub mod context;

pub use context::{Session, SessionContext};
