//! HTTP client for the user API. The base URL comes from
//! [`crate::config::ClientConfig`] and is fixed for the lifetime of the client.

mod api;
mod errors;
mod users;

pub use api::ApiClient;
pub use errors::{ApiError, DEFAULT_FAILURE_MESSAGE};
