//! Errors raised while laying out packing slips.

use packslip_render_core::RenderError;
use packslip_traits::{RepositoryError, ResourceError, StoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlipError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Media could not be loaded: {0}")]
    Resource(#[from] ResourceError),

    #[error("Order data lookup failed: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Store environment error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid date format '{0}'")]
    DateFormat(String),
}
