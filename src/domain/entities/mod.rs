//! Core domain entities.
//!
//! - [`UrlValue`] - A parsed URL that can derive its own alias
//! - [`UrlMapping`] - A stored alias → original URL association
//!
//! Creation inputs live in separate structs (`NewUrlMapping`), following the
//! same "new type" split as the stored entities.

pub mod mapping;
pub mod short_url;

pub use mapping::{NewUrlMapping, UrlMapping};
pub use short_url::{ALIAS_PATH_PREFIX, UrlValue, alias_url};
