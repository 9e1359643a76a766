//! Media-directory resource provider.
//!
//! Logo file names come from store configuration, which is editable from the
//! admin panel, so every resolved path is checked to stay inside the media
//! root.

use packslip_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Loads media relative to a media root such as `pub/media`.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    media_root: PathBuf,
    canonical_root: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(media_root: P) -> Self {
        let media_root = media_root.as_ref().to_path_buf();
        // may fail if the directory doesn't exist yet
        let canonical_root = media_root.canonicalize().ok();
        Self {
            media_root,
            canonical_root,
        }
    }

    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    /// `None` when `path` is absolute or escapes the media root.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        // leading slashes are how the platform writes media paths
        let relative = Path::new(path.trim_start_matches('/'));
        if relative.is_absolute() {
            return None;
        }

        let full_path = self.media_root.join(relative);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(root) = &self.canonical_root
        {
            return canonical.starts_with(root).then_some(canonical);
        }

        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return None;
        }

        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self.resolve(path).ok_or_else(|| {
            log::warn!("Refusing media path outside {}: {}", self.media_root.display(), path);
            ResourceError::NotFound(format!("{} (outside media root)", path))
        })?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
