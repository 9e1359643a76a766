//! Resource providers for packing-slip media (store logos).
//!
//! - [`FilesystemResourceProvider`]: the platform's media directory on disk
//! - [`InMemoryResourceProvider`]: re-exported from packslip-traits

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

pub use packslip_traits::InMemoryResourceProvider;
