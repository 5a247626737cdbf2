//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - URL values and stored mappings
//! - [`repositories`] - Data access trait definitions
//! - [`clock`] - Injectable time source for expiration checks
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business flows are orchestrated in
//! [`crate::application::services`].

pub mod clock;
pub mod entities;
pub mod repositories;
