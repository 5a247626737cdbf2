//! Business logic services for the application layer.

pub mod counting_service;
pub mod shortener_service;

pub use counting_service::CountingShortener;
pub use shortener_service::{Shortener, ShortenerService};

/// The usecase stack served over HTTP: base usecase plus hit counting.
pub type AppShortener = CountingShortener<ShortenerService>;
