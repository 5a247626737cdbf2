//! Small helpers shared across layers.
//!
//! - [`base62`] - Alphabet encoding for alias derivation
//! - [`expiration`] - Wire format of expiration timestamps

pub mod base62;
pub mod expiration;
