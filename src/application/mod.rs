//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations: URL validation, alias
//! derivation, persistence through repository traits, expiration checks and
//! hit counting. HTTP handlers talk only to this layer.
//!
//! # Available Services
//!
//! - [`services::ShortenerService`] - Shorten and unshorten
//! - [`services::CountingShortener`] - Decorator recording hits on resolution

pub mod services;
