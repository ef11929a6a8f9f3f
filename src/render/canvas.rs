//! In-memory RGB canvas and drawing primitives.

use image::{Rgb, RgbImage};

use crate::types::Colour;

/// An axis-aligned rectangle with inclusive corners `[x0, y0, x1, y1]`.
///
/// Coordinates may fall outside the canvas; drawing clips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Check whether a point lies inside the rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// A mutable pixel buffer of fixed size.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with a background colour.
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Read a pixel. Returns `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.image
            .get_pixel_checked(x, y)
            .map(|&Rgb([r, g, b])| Colour::rgb(r, g, b))
    }

    /// Fill a rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        let px: Rgb<u8> = colour.into();
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.image.put_pixel(x, y, px);
            }
        }
    }

    /// Draw a full-width 1-pixel horizontal line.
    pub fn hline(&mut self, y: u32, colour: Colour) {
        let w = self.width() as i32;
        self.fill_rect(Rect::new(0, y as i32, w - 1, y as i32), colour);
    }

    /// Draw a full-height 1-pixel vertical line.
    pub fn vline(&mut self, x: u32, colour: Colour) {
        let h = self.height() as i32;
        self.fill_rect(Rect::new(x as i32, 0, x as i32, h - 1), colour);
    }

    /// Set a pixel, ignoring coordinates outside the canvas.
    pub fn put(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(dst) = self.pixel_mut(x, y) {
            *dst = colour.into();
        }
    }

    /// Blend `colour` over the existing pixel with coverage `alpha` in `[0, 1]`.
    pub fn blend_pixel(&mut self, x: i32, y: i32, colour: Colour, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let Some(dst) = self.pixel_mut(x, y) else {
            return;
        };
        let src = colour.to_rgb();
        let inv = 1.0 - alpha;
        for (d, s) in dst.0.iter_mut().zip(src) {
            *d = (s as f32 * alpha + *d as f32 * inv).round() as u8;
        }
    }

    /// Borrow the underlying image.
    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the canvas and return the underlying image.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn pixel_mut(&mut self, x: i32, y: i32) -> Option<&mut Rgb<u8>> {
        if x < 0 || y < 0 {
            return None;
        }
        self.image.get_pixel_mut_checked(x as u32, y as u32)
    }

    fn clip(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let max_x = self.width() as i32 - 1;
        let max_y = self.height() as i32 - 1;
        let x0 = rect.x0.max(0);
        let y0 = rect.y0.max(0);
        let x1 = rect.x1.min(max_x);
        let y1 = rect.y1.min(max_y);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_background() {
        let canvas = Canvas::new(4, 3, Colour::rgb(1, 2, 3));
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert!(canvas.as_image().pixels().all(|p| p.0 == [1, 2, 3]));
    }

    #[test]
    fn test_fill_rect_inclusive() {
        let mut canvas = Canvas::new(5, 5, Colour::BLACK);
        canvas.fill_rect(Rect::new(1, 1, 2, 2), Colour::WHITE);

        assert_eq!(canvas.pixel(1, 1), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(2, 2), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(3, 3), Some(Colour::BLACK));
        assert_eq!(canvas.pixel(0, 0), Some(Colour::BLACK));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(4, 4, Colour::BLACK);
        canvas.fill_rect(Rect::new(-10, 2, 100, 100), Colour::WHITE);

        assert_eq!(canvas.pixel(0, 3), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(3, 2), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(3, 1), Some(Colour::BLACK));
    }

    #[test]
    fn test_fill_rect_entirely_outside() {
        let mut canvas = Canvas::new(4, 4, Colour::BLACK);
        canvas.fill_rect(Rect::new(10, 10, 20, 20), Colour::WHITE);
        assert!(canvas.as_image().pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_lines() {
        let mut canvas = Canvas::new(3, 3, Colour::BLACK);
        canvas.hline(1, Colour::WHITE);
        assert_eq!(canvas.pixel(0, 1), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(2, 1), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(0, 0), Some(Colour::BLACK));

        canvas.vline(0, Colour::rgb(9, 9, 9));
        assert_eq!(canvas.pixel(0, 2), Some(Colour::rgb(9, 9, 9)));
    }

    #[test]
    fn test_blend_pixel() {
        let mut canvas = Canvas::new(2, 1, Colour::BLACK);
        canvas.blend_pixel(0, 0, Colour::WHITE, 1.0);
        canvas.blend_pixel(1, 0, Colour::WHITE, 0.5);
        canvas.blend_pixel(-1, 0, Colour::WHITE, 1.0);

        assert_eq!(canvas.pixel(0, 0), Some(Colour::WHITE));
        assert_eq!(canvas.pixel(1, 0), Some(Colour::rgb(128, 128, 128)));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(0, 0, 8, 8);
        assert!(rect.contains(8, 8));
        assert!(!rect.contains(9, 0));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let canvas = Canvas::new(1, 1, Colour::BLACK);
        assert_eq!(canvas.pixel(1, 0), None);
    }
}
