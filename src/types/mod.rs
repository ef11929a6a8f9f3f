//! Core domain types for brandkit.
//!
//! - `Colour` - RGB colour values with hex parsing and interpolation
//! - `BrandPalette` - the fixed named brand colours

mod colour;
pub mod palette;

pub use colour::Colour;
pub use palette::BrandPalette;
