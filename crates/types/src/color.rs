use serde::{Deserialize, Serialize, de};

/// A fill color as understood by the canvas.
///
/// Packing slips only use gray levels, but RGB is kept so a canvas can be
/// driven by configured brand colors without another type.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum Color {
    Gray(f32),
    Rgb { r: u8, g: u8, b: u8 },
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::Gray(0.0);
    pub const WHITE: Color = Color::Gray(1.0);

    /// A gray level, clamped to `0.0..=1.0`.
    pub fn gray(level: f32) -> Self {
        Color::Gray(level.clamp(0.0, 1.0))
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix('#') else {
            return Err(format!("Color must start with #, got: {}", s));
        };

        let component = |digits: &str, name: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid {} component: {}", name, e))
        };

        match hex.len() {
            3 => Ok(Color::Rgb {
                r: component(&hex[0..1].repeat(2), "red")?,
                g: component(&hex[1..2].repeat(2), "green")?,
                b: component(&hex[2..3].repeat(2), "blue")?,
            }),
            6 => Ok(Color::Rgb {
                r: component(&hex[0..2], "red")?,
                g: component(&hex[2..4], "green")?,
                b: component(&hex[4..6], "blue")?,
            }),
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Level(f32),
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Level(level) => Ok(Color::gray(level)),
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color::Rgb { r, g, b }),
        }
    }
}
