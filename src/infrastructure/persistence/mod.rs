//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`PgMappingRepository`] - Alias mapping storage and retrieval
//! - [`PgHitCountRepository`] - Atomic per-alias hit counters

pub mod pg_hit_count_repository;
pub mod pg_mapping_repository;

pub use pg_hit_count_repository::PgHitCountRepository;
pub use pg_mapping_repository::PgMappingRepository;
