//! staticguard
//!
//! Hardened static-file access: a pure, lexical path-containment validator
//! paired with a file service and a thin HTTP serving surface.
//!
//! # Architecture
//!
//! - **core**: Infrastructure - configuration, error handling, and the
//!   containment validator every file access goes through
//! - **domains**: Business logic organized by bounded contexts
//!   - **files**: Validated file reads under the configured base directory
//! - **server**: The axum HTTP surface mapping outcomes to responses
//!
//! # Example
//!
//! ```rust,no_run
//! use staticguard::core::Containment;
//!
//! fn main() -> anyhow::Result<()> {
//!     let containment = Containment::new("/srv/static/images")?;
//!     let safe = containment.validate("cat.png")?;
//!     assert_eq!(safe, std::path::PathBuf::from("/srv/static/images/cat.png"));
//!     assert!(containment.validate("../../etc/passwd").is_err());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod server;

// Re-export commonly used types for convenience
pub use core::{Config, Containment, ContainmentError, Error, Result};
pub use domains::files::{FileAccessError, FileService};
pub use server::HttpServer;
