//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into usecase calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Query and response shapes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
