//! # sharehub-core
//!
//! Core crate for the ShareHub client. Contains the configuration schema,
//! the token storage trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ShareHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
