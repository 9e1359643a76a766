//! ResourceProvider trait for loading media such as the store logo.
//!
//! The renderer asks for media by a path relative to the media root
//! (`sales/store/logo/<file>`) and never touches the filesystem itself.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// Loads media bytes by relative path.
///
/// # Implementations
///
/// - `FilesystemResourceProvider` (packslip-resource): a media directory on disk
/// - `InMemoryResourceProvider`: pre-populated bytes, used by tests and embedders
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load the resource at `path`.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory resource provider.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` under `path`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path = path.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert(path, Arc::new(data));
        Ok(())
    }

    /// Builder-style variant of [`add`](Self::add).
    pub fn with(self, path: impl Into<String>, data: Vec<u8>) -> Result<Self, ResourceError> {
        self.add(path, data)?;
        Ok(self)
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
