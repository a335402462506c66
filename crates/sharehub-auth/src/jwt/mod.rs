//! Bearer token payload decoding.

pub mod claims;
pub mod decoder;

pub use claims::TokenClaims;
pub use decoder::TokenDecoder;
