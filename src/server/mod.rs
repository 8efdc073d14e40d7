//! HTTP serving surface.
//!
//! This module exposes the files domain over HTTP:
//! - `GET /files?p=<fragment>` - validated file read
//! - `GET /health` - liveness check
//! - `GET /` - service info
//!
//! The handlers translate file-access outcomes into client-facing responses.
//! Rejected fragments become a generic 403 that never echoes the path.

mod error;
mod http;

pub use error::{ServerError, ServerResult};
pub use http::HttpServer;
