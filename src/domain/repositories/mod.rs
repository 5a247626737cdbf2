//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access; concrete implementations live in
//! `crate::infrastructure::memory` (volatile) and
//! `crate::infrastructure::persistence` (PostgreSQL). Mock implementations
//! are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`MappingRepository`] - Alias → original URL associations
//! - [`HitCountRepository`] - Per-alias resolution counters

pub mod hit_count_repository;
pub mod mapping_repository;

pub use hit_count_repository::HitCountRepository;
pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use hit_count_repository::MockHitCountRepository;
#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
