use crate::error::RenderError;
use crate::font::StandardFont;
use packslip_types::{Color, PageSize};

/// Handle to an image registered with [`DocumentCanvas::embed_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

/// Paged drawing surface with absolute coordinates in points, origin at the
/// bottom-left corner of the page.
///
/// Font, fill color and line width are sticky: they stay in effect until set
/// again, including across pages.
pub trait DocumentCanvas {
    fn begin_page(&mut self, size: PageSize) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError>;

    fn set_font(&mut self, font: StandardFont, size: f32) -> Result<(), RenderError>;

    fn set_fill_color(&mut self, color: Color) -> Result<(), RenderError>;

    fn set_line_width(&mut self, width: f32) -> Result<(), RenderError>;

    /// Fill with the current fill color and stroke the outline, between two
    /// opposite corners.
    fn draw_rectangle(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError>;

    /// Draw `text` with its baseline starting at (`x`, `y`).
    fn draw_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), RenderError>;

    /// Register encoded image bytes. Embedding the same `key` twice returns
    /// the first handle without decoding again.
    fn embed_image(&mut self, key: &str, data: &[u8]) -> Result<ImageId, RenderError>;

    /// Scale an embedded image into the box between two opposite corners.
    fn draw_image(
        &mut self,
        image: ImageId,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Result<(), RenderError>;

    /// Pages completed so far.
    fn page_count(&self) -> usize;
}
