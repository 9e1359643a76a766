use crate::writer::StreamingPdfWriter;
use crate::xobject;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, StringFormat, dictionary};
use packslip_render_core::{DocumentCanvas, ImageId, RenderError, StandardFont};
use packslip_types::{Color, PageSize, Rect};
use std::collections::HashMap;
use std::io::{Seek, Write};

/// A [`DocumentCanvas`] that writes a PDF to `W` page by page.
pub struct LopdfCanvas<W: Write + Seek> {
    writer: StreamingPdfWriter<W>,
    page: Option<OpenPage>,
    state: GraphicsState,
    images: HashMap<String, ImageId>,
    image_names: Vec<String>,
}

struct OpenPage {
    size: PageSize,
    ops: Vec<Operation>,
}

/// Sticky drawing state, replayed at the top of every page because PDF
/// graphics state does not carry over between content streams.
#[derive(Debug, Clone, Copy)]
struct GraphicsState {
    font: Option<(StandardFont, f32)>,
    fill: Color,
    line_width: f32,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            font: None,
            fill: Color::BLACK,
            line_width: 1.0,
        }
    }
}

impl<W: Write + Seek> LopdfCanvas<W> {
    pub fn new(writer: W) -> Result<Self, RenderError> {
        let mut font_dict = Dictionary::new();
        for font in StandardFont::ALL {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(font.resource_name().as_bytes(), Object::Dictionary(single_font_dict));
        }

        Ok(Self {
            writer: StreamingPdfWriter::new(writer, "1.7", font_dict)?,
            page: None,
            state: GraphicsState::default(),
            images: HashMap::new(),
            image_names: Vec::new(),
        })
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.writer.set_title(title);
        self
    }

    /// Write the page tree and trailer and hand back the sink.
    pub fn finish(self) -> Result<W, RenderError> {
        if self.page.is_some() {
            return Err(RenderError::PageOpen);
        }
        Ok(self.writer.finish()?)
    }

    fn ops(&mut self) -> Result<&mut Vec<Operation>, RenderError> {
        self.page
            .as_mut()
            .map(|p| &mut p.ops)
            .ok_or(RenderError::NoPage)
    }
}

fn fill_color_op(color: Color) -> Operation {
    match color {
        Color::Gray(level) => Operation::new("g", vec![level.into()]),
        Color::Rgb { r, g, b } => Operation::new(
            "rg",
            vec![
                (r as f32 / 255.0).into(),
                (g as f32 / 255.0).into(),
                (b as f32 / 255.0).into(),
            ],
        ),
    }
}

impl<W: Write + Seek> DocumentCanvas for LopdfCanvas<W> {
    fn begin_page(&mut self, size: PageSize) -> Result<(), RenderError> {
        if self.page.is_some() {
            return Err(RenderError::PageOpen);
        }
        let ops = vec![
            fill_color_op(self.state.fill),
            Operation::new("w", vec![self.state.line_width.into()]),
        ];
        self.page = Some(OpenPage { size, ops });
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let page = self.page.take().ok_or(RenderError::NoPage)?;
        let content_id = self.writer.write_content_stream(Content {
            operations: page.ops,
        })?;

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.writer.pages_id,
            "MediaBox" => vec![0.0_f32.into(), 0.0_f32.into(), page.size.width.into(), page.size.height.into()],
            "Contents" => content_id,
            "Resources" => self.writer.resources_id,
        };
        let page_id = self.writer.write_object(page_dict.into())?;
        self.writer.add_page_id(page_id);
        log::trace!("Wrote page {} as object {:?}", self.writer.page_count(), page_id);
        Ok(())
    }

    fn set_font(&mut self, font: StandardFont, size: f32) -> Result<(), RenderError> {
        self.state.font = Some((font, size));
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.state.fill = color;
        if let Some(page) = self.page.as_mut() {
            page.ops.push(fill_color_op(color));
        }
        Ok(())
    }

    fn set_line_width(&mut self, width: f32) -> Result<(), RenderError> {
        self.state.line_width = width;
        if let Some(page) = self.page.as_mut() {
            page.ops.push(Operation::new("w", vec![width.into()]));
        }
        Ok(())
    }

    fn draw_rectangle(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError> {
        let rect = Rect::from_corners(x1, y1, x2, y2);
        let ops = self.ops()?;
        ops.push(Operation::new(
            "re",
            vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()],
        ));
        ops.push(Operation::new("B", vec![]));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), RenderError> {
        let (font, size) = self
            .state
            .font
            .ok_or_else(|| RenderError::Other("No font set before drawing text".into()))?;
        let ops = self.ops()?;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![Object::Name(font.resource_name().as_bytes().to_vec()), size.into()],
        ));
        ops.push(Operation::new("Td", vec![x.into(), y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn embed_image(&mut self, key: &str, data: &[u8]) -> Result<ImageId, RenderError> {
        if let Some(id) = self.images.get(key) {
            return Ok(*id);
        }

        let encoded = xobject::to_xobject(data)?;
        let mut image = encoded.image;
        if let Some(alpha) = encoded.alpha {
            let mask_id = self.writer.write_object(Object::Stream(alpha))?;
            image.dict.set("SMask", mask_id);
        }
        let object_id = self.writer.write_object(Object::Stream(image))?;

        let id = ImageId(self.image_names.len());
        let name = format!("Im{}", id.0 + 1);
        self.writer.register_xobject(&name, object_id);
        self.image_names.push(name);
        self.images.insert(key.to_string(), id);
        log::debug!(
            "Embedded image '{}' ({}x{}) as {:?}",
            key,
            encoded.width,
            encoded.height,
            object_id
        );
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
        let name = self
            .image_names
            .get(image.0)
            .ok_or(RenderError::UnknownImage(image.0))?
            .clone();
        let rect = Rect::from_corners(x1, y1, x2, y2);
        let ops = self.ops()?;
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new(
            "cm",
            vec![
                rect.width.into(),
                0.0_f32.into(),
                0.0_f32.into(),
                rect.height.into(),
                rect.x.into(),
                rect.y.into(),
            ],
        ));
        ops.push(Operation::new("Do", vec![Object::Name(name.into_bytes())]));
        ops.push(Operation::new("Q", vec![]));
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.writer.page_count()
    }
}

/// Encodes text for the WinAnsiEncoding base fonts. Characters outside the
/// code page become `?`.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
