//! Core traits implemented by other ShareHub crates.

pub mod token_store;

pub use token_store::TokenStore;
