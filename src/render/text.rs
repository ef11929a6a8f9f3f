//! Text measurement, centring and drawing.

use rusttype::{point, Scale};

use crate::types::Colour;

use super::bitmap;
use super::font::{Font, FontFace};
use super::Canvas;

/// Ink bounding box of a string drawn with its origin at `(0, 0)`.
///
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    fn include(&mut self, other: TextBox, first: bool) {
        if first {
            *self = other;
            return;
        }
        self.left = self.left.min(other.left);
        self.top = self.top.min(other.top);
        self.right = self.right.max(other.right);
        self.bottom = self.bottom.max(other.bottom);
    }
}

/// Measure the rendered bounding box of `text`.
///
/// Text with no visible ink (empty or all spaces) measures as an empty box at
/// the origin.
pub fn measure(text: &str, font: &Font) -> TextBox {
    let mut bbox = TextBox::default();
    let mut first = true;

    match font.face() {
        FontFace::Outline { font: face, .. } => {
            let scale = Scale::uniform(font.size());
            let ascent = face.v_metrics(scale).ascent;
            for glyph in face.layout(text, scale, point(0.0, ascent)) {
                if let Some(bb) = glyph.pixel_bounding_box() {
                    let glyph_box = TextBox {
                        left: bb.min.x,
                        top: bb.min.y,
                        right: bb.max.x,
                        bottom: bb.max.y,
                    };
                    bbox.include(glyph_box, first);
                    first = false;
                }
            }
        }
        FontFace::Builtin => {
            bitmap::for_each_pixel(text, |x, y| {
                let pixel_box = TextBox {
                    left: x,
                    top: y,
                    right: x + 1,
                    bottom: y + 1,
                };
                bbox.include(pixel_box, first);
                first = false;
            });
        }
    }

    bbox
}

/// Left edge that centres `text_width` inside a span.
///
/// Uses floor division so text wider than the span still lands symmetrically.
pub fn centered_x(span_start: i32, span_width: i32, text_width: i32) -> i32 {
    span_start + (span_width - text_width).div_euclid(2)
}

/// Draw `text` with the top of its line box at `y`.
pub fn draw_text(canvas: &mut Canvas, x: i32, y: i32, text: &str, font: &Font, colour: Colour) {
    match font.face() {
        FontFace::Outline { font: face, .. } => {
            let scale = Scale::uniform(font.size());
            let ascent = face.v_metrics(scale).ascent;
            let origin = point(x as f32, y as f32 + ascent);
            for glyph in face.layout(text, scale, origin) {
                if let Some(bb) = glyph.pixel_bounding_box() {
                    glyph.draw(|gx, gy, coverage| {
                        canvas.blend_pixel(
                            bb.min.x + gx as i32,
                            bb.min.y + gy as i32,
                            colour,
                            coverage,
                        );
                    });
                }
            }
        }
        FontFace::Builtin => {
            bitmap::for_each_pixel(text, |px, py| canvas.put(x + px, y + py, colour));
        }
    }
}

/// Measure `text` and draw it centred horizontally within a span at `y`.
///
/// Returns the box the text occupies on the canvas.
pub fn draw_centered(
    canvas: &mut Canvas,
    span_start: i32,
    span_width: i32,
    y: i32,
    text: &str,
    font: &Font,
    colour: Colour,
) -> TextBox {
    let bbox = measure(text, font);
    let x = centered_x(span_start, span_width, bbox.width());
    draw_text(canvas, x, y, text, font, colour);
    TextBox {
        left: x + bbox.left,
        top: y + bbox.top,
        right: x + bbox.right,
        bottom: y + bbox.bottom,
    }
}
