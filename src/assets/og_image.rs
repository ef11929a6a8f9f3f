//! Open Graph sharing card: title, tagline and value proposition stacked in
//! the upper half, a three-column stats bar near the bottom, and gold accent
//! bars along the top and bottom edges.

use crate::render::{draw_centered, AccentBars, Canvas, Font, FontFace, Gradient, Rect};
use crate::types::palette::{ACCENT_GOLD, MUTED, PRIMARY, PRIMARY_DARK, WHITE};
use crate::types::Colour;

use super::{Asset, Composition, PlacedLabel, GRADIENT_DAMPING};

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;
pub const ACCENT_WIDTH: i32 = 6;

pub const TITLE: &str = "TheGrantScout";
pub const TAGLINE: &str = "AI-Powered Grant Matching for Nonprofits";
pub const SUBTITLE: &str = "Find foundations already funding work like yours";
pub const STATS: [&str; 3] = [
    "143,000+ Foundations",
    "8M+ Grants Analyzed",
    "AI-Powered Matching",
];

pub const TITLE_SIZE: f32 = 72.0;
pub const TAGLINE_SIZE: f32 = 32.0;
pub const SUBTITLE_SIZE: f32 = 28.0;

const TITLE_Y: i32 = 180;
const TAGLINE_OFFSET: i32 = 100;
const SUBTITLE_OFFSET: i32 = 60;
/// Distance of the stats bar from the bottom edge.
const STATS_INSET: i32 = 120;

pub fn render(face: &FontFace) -> Composition {
    let (width, height) = (WIDTH as i32, HEIGHT as i32);
    let mut canvas = Canvas::new(WIDTH, HEIGHT, PRIMARY_DARK);

    let gradient = Gradient::vertical(PRIMARY_DARK, PRIMARY, GRADIENT_DAMPING);
    gradient.paint(&mut canvas);

    AccentBars::new(ACCENT_WIDTH, ACCENT_GOLD).paint(&mut canvas);

    let title_font = face.at_size(TITLE_SIZE);
    let tagline_font = face.at_size(TAGLINE_SIZE);
    let subtitle_font = face.at_size(SUBTITLE_SIZE);

    let mut labels = Vec::with_capacity(3 + STATS.len());
    let mut place = |canvas: &mut Canvas,
                     span: (i32, i32),
                     y: i32,
                     text: &'static str,
                     font: &Font,
                     colour: Colour| {
        let bounds = draw_centered(canvas, span.0, span.1, y, text, font, colour);
        labels.push(PlacedLabel {
            text,
            colour,
            bounds,
        });
    };

    let title_y = TITLE_Y;
    place(&mut canvas, (0, width), title_y, TITLE, &title_font, ACCENT_GOLD);

    let tagline_y = title_y + TAGLINE_OFFSET;
    place(&mut canvas, (0, width), tagline_y, TAGLINE, &tagline_font, WHITE);

    let subtitle_y = tagline_y + SUBTITLE_OFFSET;
    place(&mut canvas, (0, width), subtitle_y, SUBTITLE, &subtitle_font, MUTED);

    let stats_y = height - STATS_INSET;
    let column = width / STATS.len() as i32;
    for (i, stat) in STATS.into_iter().enumerate() {
        let span = (column * i as i32, column);
        place(&mut canvas, span, stats_y, stat, &subtitle_font, ACCENT_GOLD);
    }

    Composition {
        asset: Asset::OgImage,
        canvas,
        gradient,
        safe_area: Rect::new(0, ACCENT_WIDTH + 1, width - 1, height - ACCENT_WIDTH - 1),
        labels,
    }
}
