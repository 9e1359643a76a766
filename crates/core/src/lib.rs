//! # packslip-core
//!
//! Lays out packing slips on any [`DocumentCanvas`](packslip_render_core::DocumentCanvas).
//!
//! - **slip**: the page renderer, one page per shipment
//! - **layout**: fixed page coordinates and config paths
//! - **format**: text derived from order fields
//! - **wrap**: word-wrap for the customer's comment
//! - **emulation**: scoped store emulation
//!
//! The crate never touches the filesystem or a PDF library directly; order
//! data, store configuration and media come in through the collaborator
//! traits of `packslip-traits`.

pub mod emulation;
pub mod error;
pub mod format;
pub mod layout;
pub mod options;
pub mod slip;
pub mod wrap;

pub use emulation::{EmulationGuard, StoreEmulation};
pub use error::SlipError;
pub use options::{Labels, SlipOptions};
pub use slip::{Collaborators, ShipmentSlipRenderer};
pub use wrap::{COMMENT_WRAP_WIDTH, wrap_comment};
