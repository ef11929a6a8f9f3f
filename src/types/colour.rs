//! Colour type, hex parsing and damped interpolation.

use std::fmt;
use std::str::FromStr;

use crate::error::{BrandError, Result};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    ///
    /// The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let mut digits = hex.chars().map(parse_hex_digit);
                let mut next = || digits.next().unwrap_or_else(|| Err(invalid_hex(s)));
                let (r, g, b) = (next()?, next()?, next()?);
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to an RGB array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Move from `self` toward `end` by `ratio * damping` of the distance.
    ///
    /// Each channel is computed as `start + (end - start) * ratio * damping`
    /// and truncated toward zero, so with `damping < 1` the result never
    /// reaches `end`.
    pub fn lerp_damped(self, end: Colour, ratio: f64, damping: f64) -> Colour {
        let channel = |a: u8, b: u8| {
            let delta = f64::from(b) - f64::from(a);
            (f64::from(a) + delta * ratio * damping) as u8
        };
        Colour::rgb(
            channel(self.r, end.r),
            channel(self.g, end.g),
            channel(self.b, end.b),
        )
    }

    /// WCAG 2.1 relative luminance in `[0, 1]`.
    pub fn relative_luminance(self) -> f32 {
        use palette::{LinSrgb, Srgb};

        let rgb: Srgb<f32> = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let linear: LinSrgb<f32> = rgb.into_linear();

        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }

    /// WCAG 2.1 contrast ratio against another colour, in `[1, 21]`.
    pub fn contrast_ratio(self, other: Colour) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (light, dark) = if a >= b { (a, b) } else { (b, a) };
        (light + 0.05) / (dark + 0.05)
    }
}

impl FromStr for Colour {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Colour> for image::Rgb<u8> {
    fn from(colour: Colour) -> Self {
        image::Rgb(colour.to_rgb())
    }
}

fn invalid_hex(s: &str) -> BrandError {
    BrandError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB or #RRGGBB format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| BrandError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| BrandError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
