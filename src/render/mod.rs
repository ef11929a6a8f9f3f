//! Rendering module for brandkit.
//!
//! Drawing primitives shared by the asset compositions: canvas, gradients,
//! decorative rectangles, fonts and text, and PNG output.

mod bitmap;
mod canvas;
mod decor;
mod font;
mod gradient;
mod png;
mod text;

pub use canvas::{Canvas, Rect};
pub use decor::{AccentBars, Border};
pub use font::{Font, FontFace, FontResolver, FontSource};
pub use gradient::{Direction, Gradient};
pub use png::write_png;
pub use text::{centered_x, draw_centered, draw_text, measure, TextBox};
