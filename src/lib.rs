//! brandkit - Brand image generator
//!
//! Procedurally draws a product's square logo and Open Graph sharing image
//! from fixed brand colours: a damped vertical gradient, gold decoration and
//! centred text labels, written out as PNG.

pub mod assets;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod render;
pub mod types;
pub mod validation;

pub use assets::{generate, Asset, BuiltAsset, Composition, PlacedLabel};
pub use error::{BrandError, Result};
pub use manifest::Manifest;
pub use render::{
    write_png, Canvas, Font, FontFace, FontResolver, FontSource, Gradient, Rect, TextBox,
};
pub use types::{BrandPalette, Colour};
pub use validation::{validate_composition, Diagnostic, Severity, ValidationResult};
