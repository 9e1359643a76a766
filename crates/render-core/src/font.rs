/// Base-14 faces; viewers supply the glyphs, so nothing is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    pub const ALL: [StandardFont; 2] = [StandardFont::Helvetica, StandardFont::HelveticaBold];

    /// The PostScript name written as `BaseFont`.
    pub fn postscript_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// The key under which the font sits in the page resources.
    pub fn resource_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
        }
    }
}
