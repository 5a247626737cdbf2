//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod count;
pub mod health;
pub mod redirect;
pub mod shorten;
pub mod unshorten;

pub use count::count_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use unshorten::unshorten_handler;
