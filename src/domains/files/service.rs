//! File service implementation.
//!
//! The FileService is the only component that touches the filesystem. It
//! validates every untrusted fragment through the containment check first,
//! then reads the resolved path with a scoped handle that is released on
//! all exit paths.

use std::io;
use std::path::PathBuf;

use tokio::fs;
use tracing::{debug, instrument};

use super::error::FileAccessError;
use crate::core::security::Containment;

/// Service for reading files under a contained base directory.
///
/// Holds no open handles between calls and no mutable state; cloning is
/// cheap and concurrent use needs no synchronization.
#[derive(Debug, Clone)]
pub struct FileService {
    containment: Containment,
}

impl FileService {
    /// Create a new FileService rooted at the given containment base.
    pub fn new(containment: Containment) -> Self {
        Self { containment }
    }

    /// The containment validator this service reads through.
    pub fn containment(&self) -> &Containment {
        &self.containment
    }

    /// Resolve an untrusted fragment without reading anything.
    ///
    /// Rejections are ordinary control flow, logged at debug only.
    pub fn resolve(&self, fragment: &str) -> Result<PathBuf, FileAccessError> {
        self.containment.validate(fragment).map_err(|e| {
            debug!("Rejected fragment: {}", e);
            FileAccessError::Denied(e)
        })
    }

    /// Validate a fragment and read the file it resolves to.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - Raw file contents.
    /// * `Err(FileAccessError::Denied)` - The fragment escapes the base.
    /// * `Err(FileAccessError::NotFound)` - No regular file at the resolved
    ///   path (directories are not servable).
    /// * `Err(FileAccessError::Io)` - Any other read failure.
    #[instrument(skip_all)]
    pub async fn read(&self, fragment: &str) -> Result<Vec<u8>, FileAccessError> {
        let path = self.resolve(fragment)?;

        match fs::read(&path).await {
            Ok(bytes) => {
                debug!("Read {} bytes from {}", bytes.len(), path.display());
                Ok(bytes)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FileAccessError::NotFound),
            // Reading a directory reports IsADirectory on Linux and varies
            // elsewhere; treat any directory target as not-found.
            Err(e) if path.is_dir() => {
                debug!("Resolved path is a directory, not servable: {}", e);
                Err(FileAccessError::NotFound)
            }
            Err(e) => Err(FileAccessError::Io(e)),
        }
    }
}
