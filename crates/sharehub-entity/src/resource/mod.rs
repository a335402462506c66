//! Shared resources and their category grouping.

pub mod category;
pub mod model;

pub use category::CategoryGroup;
pub use model::{CategoryRef, OwnerRef, Resource};
