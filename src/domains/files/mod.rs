//! Files domain module.
//!
//! This module handles validated file access: every read request carries an
//! untrusted path fragment which is checked against the configured base
//! directory before the filesystem is touched.
//!
//! ## Architecture
//!
//! - `error.rs` - Outcome taxonomy for file access (denied / not found / I/O)
//! - `service.rs` - FileService combining containment validation and reads

mod error;
mod service;

pub use error::FileAccessError;
pub use service::FileService;
