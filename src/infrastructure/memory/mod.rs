//! In-memory repository implementations.
//!
//! Volatile, process-lifetime storage backed by [`dashmap::DashMap`].
//! Used for `DB_TYPE=memory` deployments and throughout the test suite.

mod hit_count_repository;
mod mapping_repository;

pub use hit_count_repository::InMemoryHitCountRepository;
pub use mapping_repository::InMemoryMappingRepository;
