//! Streaming PDF canvas using lopdf.
//!
//! Page content is written to the sink as soon as a page ends; only the
//! shared resources, page tree and catalog are held until `finish`.

mod canvas;
mod writer;
mod xobject;

pub use canvas::LopdfCanvas;
pub use writer::StreamingPdfWriter;
