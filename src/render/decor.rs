//! Decorative borders and accent bars.
//!
//! Both are plain filled rectangles drawn over whatever is beneath them.
//! Geometry uses inclusive corners, so a border of thickness `t` starting at
//! the top edge covers rows `0..=t`.

use crate::types::Colour;

use super::{Canvas, Rect};

/// A frame of solid rectangles along all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub thickness: i32,
    pub colour: Colour,
}

impl Border {
    pub fn new(thickness: i32, colour: Colour) -> Self {
        Self { thickness, colour }
    }

    /// The four edge rectangles for a canvas of the given size.
    pub fn rects(&self, width: u32, height: u32) -> [Rect; 4] {
        let (w, h, t) = (width as i32, height as i32, self.thickness);
        [
            Rect::new(0, 0, w - 1, t),
            Rect::new(0, h - t, w - 1, h - 1),
            Rect::new(0, 0, t, h - 1),
            Rect::new(w - t, 0, w - 1, h - 1),
        ]
    }

    pub fn paint(&self, canvas: &mut Canvas) {
        for rect in self.rects(canvas.width(), canvas.height()) {
            canvas.fill_rect(rect, self.colour);
        }
    }
}

/// Solid bars across the top and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentBars {
    pub thickness: i32,
    pub colour: Colour,
}

impl AccentBars {
    pub fn new(thickness: i32, colour: Colour) -> Self {
        Self { thickness, colour }
    }

    /// The top and bottom bar rectangles, before clipping.
    pub fn rects(&self, width: u32, height: u32) -> [Rect; 2] {
        let (w, h, t) = (width as i32, height as i32, self.thickness);
        [Rect::new(0, 0, w, t), Rect::new(0, h - t, w, h)]
    }

    pub fn paint(&self, canvas: &mut Canvas) {
        for rect in self.rects(canvas.width(), canvas.height()) {
            canvas.fill_rect(rect, self.colour);
        }
    }
}
