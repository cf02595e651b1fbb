//! HTTP gateway: one configured client surface for the whole app.
//!
//! Every service module goes through [`client`]; the gateway attaches the
//! bearer token, applies the uniform request timeout and funnels 401
//! responses into the single session-expiry path.

pub mod client;
pub mod config;
pub mod error;

pub use error::{ApiError, ApiResult};
