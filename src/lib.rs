//! # packslip
//!
//! Packing-slip PDF generation for e-commerce shipments: one A4 page per
//! shipment with the order details, an item table sorted by SKU and the
//! billing, contact and shipping addresses.
//!
//! ```no_run
//! use packslip::PackingSlipBuilder;
//!
//! # fn main() -> Result<(), packslip::PipelineError> {
//! let generator = PackingSlipBuilder::new()
//!     .with_config_file("packslip.json")?
//!     .with_media_dir("pub/media")
//!     .build()?;
//! generator.generate_from_json_file("shipments.json", "pakbonnen.pdf")?;
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod config;
pub mod error;

pub use builder::{PackingSlipBuilder, PackingSlipGenerator};
pub use config::{ScopeSettings, SlipConfig};
pub use error::PipelineError;

pub use packslip_core as slip;
pub use packslip_source as source;
pub use packslip_types as types;
