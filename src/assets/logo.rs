//! Square app logo: a gold "TGS" mark over the product name, framed by a
//! gold border.

use crate::render::{draw_centered, measure, Border, Canvas, FontFace, Gradient, Rect};
use crate::types::palette::{ACCENT_GOLD, PRIMARY, PRIMARY_DARK, WHITE};

use super::{Asset, Composition, PlacedLabel, GRADIENT_DAMPING};

/// Width and height in pixels.
pub const SIZE: u32 = 512;
pub const BORDER_WIDTH: i32 = 8;

pub const MARK: &str = "TGS";
pub const MARK_SIZE: f32 = 120.0;
pub const NAME: &str = "TheGrantScout";
pub const NAME_SIZE: f32 = 36.0;

/// The mark sits this far above true vertical centre.
const MARK_RAISE: i32 = 40;
/// Gap between the bottom of the mark and the name.
const NAME_GAP: i32 = 30;

pub fn render(face: &FontFace) -> Composition {
    let size = SIZE as i32;
    let mut canvas = Canvas::new(SIZE, SIZE, PRIMARY_DARK);

    let gradient = Gradient::vertical(PRIMARY_DARK, PRIMARY, GRADIENT_DAMPING);
    gradient.paint(&mut canvas);

    Border::new(BORDER_WIDTH, ACCENT_GOLD).paint(&mut canvas);

    let mark_font = face.at_size(MARK_SIZE);
    let mark_height = measure(MARK, &mark_font).height();
    let mark_y = (size - mark_height).div_euclid(2) - MARK_RAISE;
    let mark = draw_centered(&mut canvas, 0, size, mark_y, MARK, &mark_font, ACCENT_GOLD);

    let name_font = face.at_size(NAME_SIZE);
    let name_y = mark_y + mark_height + NAME_GAP;
    let name = draw_centered(&mut canvas, 0, size, name_y, NAME, &name_font, WHITE);

    Composition {
        asset: Asset::Logo,
        canvas,
        gradient,
        safe_area: Rect::new(
            BORDER_WIDTH + 1,
            BORDER_WIDTH + 1,
            size - BORDER_WIDTH - 1,
            size - BORDER_WIDTH - 1,
        ),
        labels: vec![
            PlacedLabel {
                text: MARK,
                colour: ACCENT_GOLD,
                bounds: mark,
            },
            PlacedLabel {
                text: NAME,
                colour: WHITE,
                bounds: name,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    #[test]
    fn test_border_overrides_gradient() {
        let composition = render(&FontFace::Builtin);
        let canvas = &composition.canvas;

        for i in 0..SIZE {
            for t in 0..8 {
                assert_eq!(canvas.pixel(i, t), Some(Colour::rgb(212, 168, 83)));
                assert_eq!(canvas.pixel(t, i), Some(Colour::rgb(212, 168, 83)));
                assert_eq!(canvas.pixel(i, SIZE - 1 - t), Some(ACCENT_GOLD));
                assert_eq!(canvas.pixel(SIZE - 1 - t, i), Some(ACCENT_GOLD));
            }
        }
    }

    #[test]
    fn test_interior_is_gradient() {
        let composition = render(&FontFace::Builtin);
        // Just inside the border, away from the text
        assert_eq!(composition.canvas.pixel(20, 20), Some(composition.background_at(20)));
        assert_eq!(composition.canvas.pixel(20, 490), Some(composition.background_at(490)));
    }

    #[test]
    fn test_labels_stack_with_fixed_gap() {
        let composition = render(&FontFace::Builtin);
        let [mark, name] = composition.labels.as_slice() else {
            panic!("expected two labels");
        };

        assert_eq!(mark.text, "TGS");
        assert_eq!(name.text, "TheGrantScout");
        // Builtin glyphs start at the line top, so ink top equals the draw y
        assert_eq!(name.bounds.top - mark.bounds.bottom, NAME_GAP);
    }

    #[test]
    fn test_labels_centred() {
        let composition = render(&FontFace::Builtin);
        for label in &composition.labels {
            let left_margin = label.bounds.left;
            let right_margin = SIZE as i32 - label.bounds.right;
            assert!((left_margin - right_margin).abs() <= 1, "{} off-centre", label.text);
        }
    }
}
