//! A canvas that remembers every draw call with the state it was made in.

use crate::error::RenderError;
use crate::font::StandardFont;
use crate::traits::{DocumentCanvas, ImageId};
use packslip_types::{Color, PageSize, Rect};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rectangle {
        rect: Rect,
        fill: Color,
        line_width: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: StandardFont,
        size: f32,
        fill: Color,
    },
    Image {
        image: ImageId,
        rect: Rect,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPage {
    pub size: PageSize,
    pub commands: Vec<DrawCommand>,
}

impl RecordedPage {
    /// Every text command on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rectangle { .. }))
    }

    /// The first text command whose text equals `needle`.
    pub fn find_text(&self, needle: &str) -> Option<&DrawCommand> {
        self.texts()
            .find(|c| matches!(c, DrawCommand::Text { text, .. } if text == needle))
    }

    /// Position of the first text equal to `needle`.
    pub fn text_position(&self, needle: &str) -> Option<(f32, f32)> {
        match self.find_text(needle)? {
            DrawCommand::Text { x, y, .. } => Some((*x, *y)),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct RecordingCanvas {
    pages: Vec<RecordedPage>,
    current: Option<RecordedPage>,
    font: Option<(StandardFont, f32)>,
    fill: Color,
    line_width: f32,
    images: HashMap<String, ImageId>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self {
            pages: Vec::new(),
            current: None,
            font: None,
            fill: Color::BLACK,
            line_width: 1.0,
            images: HashMap::new(),
        }
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<RecordedPage> {
        self.pages
    }

    fn page_mut(&mut self) -> Result<&mut RecordedPage, RenderError> {
        self.current.as_mut().ok_or(RenderError::NoPage)
    }
}

impl DocumentCanvas for RecordingCanvas {
    fn begin_page(&mut self, size: PageSize) -> Result<(), RenderError> {
        if self.current.is_some() {
            return Err(RenderError::PageOpen);
        }
        self.current = Some(RecordedPage {
            size,
            commands: Vec::new(),
        });
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let page = self.current.take().ok_or(RenderError::NoPage)?;
        self.pages.push(page);
        Ok(())
    }

    fn set_font(&mut self, font: StandardFont, size: f32) -> Result<(), RenderError> {
        self.font = Some((font, size));
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.fill = color;
        Ok(())
    }

    fn set_line_width(&mut self, width: f32) -> Result<(), RenderError> {
        self.line_width = width;
        Ok(())
    }

    fn draw_rectangle(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError> {
        let command = DrawCommand::Rectangle {
            rect: Rect::from_corners(x1, y1, x2, y2),
            fill: self.fill,
            line_width: self.line_width,
        };
        self.page_mut()?.commands.push(command);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), RenderError> {
        let (font, size) = self
            .font
            .ok_or_else(|| RenderError::Other("No font set before drawing text".into()))?;
        let command = DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font,
            size,
            fill: self.fill,
        };
        self.page_mut()?.commands.push(command);
        Ok(())
    }

    fn embed_image(&mut self, key: &str, data: &[u8]) -> Result<ImageId, RenderError> {
        if let Some(id) = self.images.get(key) {
            return Ok(*id);
        }
        if data.is_empty() {
            return Err(RenderError::Image(format!("'{}' is empty", key)));
        }
        let id = ImageId(self.images.len());
        self.images.insert(key.to_string(), id);
        Ok(id)
    }

    fn draw_image(
        &mut self,
        image: ImageId,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Result<(), RenderError> {
        if image.0 >= self.images.len() {
            return Err(RenderError::UnknownImage(image.0));
        }
        let command = DrawCommand::Image {
            image,
            rect: Rect::from_corners(x1, y1, x2, y2),
        };
        self.page_mut()?.commands.push(command);
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_state_with_each_command() {
        let mut canvas = RecordingCanvas::new();
        canvas.begin_page(PageSize::A4).unwrap();
        canvas.set_font(StandardFont::HelveticaBold, 16.0).unwrap();
        canvas.set_fill_color(Color::gray(0.5)).unwrap();
        canvas.set_line_width(0.0).unwrap();
        canvas.draw_rectangle(25.0, 700.0, 570.0, 685.0).unwrap();
        canvas.draw_text("Pakbon", 25.0, 780.0).unwrap();
        canvas.end_page().unwrap();

        let page = &canvas.pages()[0];
        assert_eq!(
            page.commands[0],
            DrawCommand::Rectangle {
                rect: Rect::from_corners(25.0, 685.0, 570.0, 700.0),
                fill: Color::Gray(0.5),
                line_width: 0.0,
            }
        );
        assert_eq!(
            page.find_text("Pakbon"),
            Some(&DrawCommand::Text {
                text: "Pakbon".into(),
                x: 25.0,
                y: 780.0,
                font: StandardFont::HelveticaBold,
                size: 16.0,
                fill: Color::Gray(0.5),
            })
        );
        assert_eq!(page.text_position("Pakbon"), Some((25.0, 780.0)));
    }

    #[test]
    fn drawing_requires_an_open_page() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_font(StandardFont::Helvetica, 8.0).unwrap();
        assert!(matches!(
            canvas.draw_text("x", 0.0, 0.0),
            Err(RenderError::NoPage)
        ));
        assert!(matches!(canvas.end_page(), Err(RenderError::NoPage)));
    }

    #[test]
    fn pages_cannot_nest() {
        let mut canvas = RecordingCanvas::new();
        canvas.begin_page(PageSize::A4).unwrap();
        assert!(matches!(
            canvas.begin_page(PageSize::A4),
            Err(RenderError::PageOpen)
        ));
    }

    #[test]
    fn text_without_font_is_an_error() {
        let mut canvas = RecordingCanvas::new();
        canvas.begin_page(PageSize::A4).unwrap();
        assert!(canvas.draw_text("x", 0.0, 0.0).is_err());
    }

    #[test]
    fn images_are_deduplicated_by_key() {
        let mut canvas = RecordingCanvas::new();
        let a = canvas.embed_image("logo.png", b"data").unwrap();
        let b = canvas.embed_image("logo.png", b"data").unwrap();
        let c = canvas.embed_image("other.png", b"data").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        canvas.begin_page(PageSize::A4).unwrap();
        assert!(canvas.draw_image(ImageId(9), 0.0, 0.0, 1.0, 1.0).is_err());
        canvas.draw_image(a, 425.0, 700.0, 582.8, 839.25).unwrap();
    }
}
