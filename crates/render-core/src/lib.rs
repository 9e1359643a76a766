//! Core rendering abstractions for packing-slip output.
//!
//! - [`DocumentCanvas`]: absolute-coordinate drawing primitives over a paged document
//! - [`RecordingCanvas`]: a canvas that records draw calls, for layout tests
//! - [`StandardFont`]: the PDF base-14 faces the slips are set in

mod error;
mod font;
mod recording;
mod traits;

pub use error::RenderError;
pub use font::StandardFont;
pub use recording::{DrawCommand, RecordedPage, RecordingCanvas};
pub use traits::{DocumentCanvas, ImageId};
