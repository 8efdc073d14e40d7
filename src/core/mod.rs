//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the server,
//! including error handling, configuration, and the path containment
//! validator that every file access goes through.

pub mod config;
pub mod error;
pub mod security;

pub use config::Config;
pub use error::{Error, Result};
pub use security::{Containment, ContainmentError};
