/// An axis-aligned box in PDF user space (origin bottom-left).
///
/// Built from two corners the way the drawing calls receive them, so
/// `x1 > x2` or `y1 > y2` are both fine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: x1.min(x2),
            y: y1.min(y2),
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const A4: PageSize = PageSize {
        width: 595.0,
        height: 842.0,
    };
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_normalizes_corners() {
        let r = Rect::from_corners(570.0, 685.0, 25.0, 700.0);
        assert_eq!(r.x, 25.0);
        assert_eq!(r.y, 685.0);
        assert_eq!(r.width, 545.0);
        assert_eq!(r.height, 15.0);
        assert_eq!(r.right(), 570.0);
        assert_eq!(r.top(), 700.0);
    }
}
