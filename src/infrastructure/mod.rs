//! Infrastructure layer for storage backends.
//!
//! This layer implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Client for a remote shortener over its HTTP API
//! - [`memory`] - Volatile in-process stores
//! - [`persistence`] - PostgreSQL repository implementations

pub mod http;
pub mod memory;
pub mod persistence;
