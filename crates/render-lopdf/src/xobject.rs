//! Encoded image bytes to PDF image XObjects.

use image::{ColorType, ImageFormat};
use lopdf::{Dictionary, Stream, dictionary};
use packslip_render_core::RenderError;

pub(crate) struct ImageXObject {
    pub width: u32,
    pub height: u32,
    pub image: Stream,
    /// Soft mask carrying the alpha channel, when any pixel is translucent.
    pub alpha: Option<Stream>,
}

pub(crate) fn to_xobject(data: &[u8]) -> Result<ImageXObject, RenderError> {
    let format = image::guess_format(data).map_err(|e| RenderError::Image(e.to_string()))?;
    let decoded = image::load_from_memory_with_format(data, format)
        .map_err(|e| RenderError::Image(e.to_string()))?;
    let (width, height) = (decoded.width(), decoded.height());

    // Gray and RGB JPEG data can be embedded as-is. The decoder converts
    // CMYK to RGB, so those are re-encoded below instead.
    if format == ImageFormat::Jpeg && matches!(jpeg_components(data), Some(1 | 3)) {
        let color_space = match decoded.color() {
            ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16 => "DeviceGray",
            _ => "DeviceRGB",
        };
        let mut dict = image_dict(width, height, color_space);
        dict.set("Filter", "DCTDecode");
        return Ok(ImageXObject {
            width,
            height,
            image: Stream::new(dict, data.to_vec()),
            alpha: None,
        });
    }

    let rgba = decoded.to_rgba8();
    let pixels = (width as usize) * (height as usize);
    let mut rgb = Vec::with_capacity(pixels * 3);
    let mut alpha = Vec::with_capacity(pixels);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        rgb.extend_from_slice(&[r, g, b]);
        alpha.push(a);
    }

    let alpha = alpha
        .iter()
        .any(|a| *a != u8::MAX)
        .then(|| Stream::new(image_dict(width, height, "DeviceGray"), alpha));

    Ok(ImageXObject {
        width,
        height,
        image: Stream::new(image_dict(width, height, "DeviceRGB"), rgb),
        alpha,
    })
}

/// Number of color components declared in the JPEG frame header.
fn jpeg_components(data: &[u8]) -> Option<u8> {
    let mut pos = 2;
    while pos + 1 < data.len() {
        if data[pos] != 0xFF {
            return None;
        }
        let marker = data[pos + 1];
        match marker {
            0xFF => pos += 1,
            0x01 | 0xD0..=0xD7 => pos += 2,
            0xC0..=0xCF if !matches!(marker, 0xC4 | 0xC8 | 0xCC) => {
                return data.get(pos + 9).copied();
            }
            0xD9 | 0xDA => return None,
            _ => {
                let length = u16::from_be_bytes([*data.get(pos + 2)?, *data.get(pos + 3)?]);
                pos += 2 + length as usize;
            }
        }
    }
    None
}

fn image_dict(width: u32, height: u32, color_space: &str) -> Dictionary {
    dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => width as i64,
        "Height" => height as i64,
        "ColorSpace" => color_space,
        "BitsPerComponent" => 8,
    }
}
