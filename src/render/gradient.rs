//! Damped linear gradients.

use crate::types::Colour;

use super::Canvas;

/// Axis along which a gradient progresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Top to bottom, one full-width line per row.
    Vertical,
    /// Left to right, one full-height line per column.
    Horizontal,
}

/// A linear interpolation between two colours, capped by a damping ratio.
///
/// With `damping < 1` the final line stops short of `end`, which keeps the
/// effect subtle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub start: Colour,
    pub end: Colour,
    pub damping: f64,
    pub direction: Direction,
}

impl Gradient {
    /// A top-to-bottom gradient.
    pub fn vertical(start: Colour, end: Colour, damping: f64) -> Self {
        Self {
            start,
            end,
            damping,
            direction: Direction::Vertical,
        }
    }

    /// A left-to-right gradient.
    pub fn horizontal(start: Colour, end: Colour, damping: f64) -> Self {
        Self {
            start,
            end,
            damping,
            direction: Direction::Horizontal,
        }
    }

    /// Colour of line `index` out of `extent` lines.
    pub fn colour_at(&self, index: u32, extent: u32) -> Colour {
        if extent == 0 {
            return self.start;
        }
        let ratio = f64::from(index) / f64::from(extent);
        self.start.lerp_damped(self.end, ratio, self.damping)
    }

    /// Paint the gradient over the whole canvas.
    pub fn paint(&self, canvas: &mut Canvas) {
        match self.direction {
            Direction::Vertical => {
                let extent = canvas.height();
                for y in 0..extent {
                    canvas.hline(y, self.colour_at(y, extent));
                }
            }
            Direction::Horizontal => {
                let extent = canvas.width();
                for x in 0..extent {
                    canvas.vline(x, self.colour_at(x, extent));
                }
            }
        }
    }
}
