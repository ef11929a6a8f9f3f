//! The brand asset compositions.
//!
//! Each asset is a fixed pipeline: background, gradient, decoration, text.
//! Rendering returns the canvas together with where each label landed so the
//! result can be written out or checked.

pub mod logo;
pub mod og_image;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::render::{write_png, Canvas, FontFace, Gradient, Rect, TextBox};
use crate::types::Colour;

/// How far the background gradient travels toward its end colour.
pub const GRADIENT_DAMPING: f64 = 0.5;

/// A generated brand image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Asset {
    /// Square app logo.
    Logo,
    /// Social sharing (Open Graph) card.
    OgImage,
}

impl Asset {
    pub const ALL: [Asset; 2] = [Asset::Logo, Asset::OgImage];

    /// Output file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Asset::Logo => "logo.png",
            Asset::OgImage => "og-image.png",
        }
    }

    /// Output dimensions as `(width, height)`.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Asset::Logo => (logo::SIZE, logo::SIZE),
            Asset::OgImage => (og_image::WIDTH, og_image::HEIGHT),
        }
    }

    /// Render the composition with the given typeface.
    pub fn render(self, face: &FontFace) -> Composition {
        match self {
            Asset::Logo => logo::render(face),
            Asset::OgImage => og_image::render(face),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Logo => write!(f, "logo"),
            Asset::OgImage => write!(f, "OG image"),
        }
    }
}

/// A text label as placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub text: &'static str,
    pub colour: Colour,
    /// Ink box in canvas coordinates.
    pub bounds: TextBox,
}

/// A rendered asset.
#[derive(Debug, Clone)]
pub struct Composition {
    pub asset: Asset,
    pub canvas: Canvas,
    pub gradient: Gradient,
    /// Area not covered by borders or accent bars.
    pub safe_area: Rect,
    pub labels: Vec<PlacedLabel>,
}

impl Composition {
    /// Gradient colour behind row `y`.
    pub fn background_at(&self, y: i32) -> Colour {
        let height = self.canvas.height();
        let row = y.clamp(0, height as i32 - 1) as u32;
        self.gradient.colour_at(row, height)
    }
}

/// Summary of a written asset.
#[derive(Debug, Clone, Serialize)]
pub struct BuiltAsset {
    pub asset: Asset,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub font: String,
}

/// Render `asset` and write it into `output_dir` under its fixed file name.
pub fn generate(asset: Asset, output_dir: &Path, face: &FontFace) -> Result<BuiltAsset> {
    let composition = asset.render(face);
    let path = output_dir.join(asset.file_name());
    write_png(&composition.canvas, &path)?;

    Ok(BuiltAsset {
        asset,
        path,
        width: composition.canvas.width(),
        height: composition.canvas.height(),
        font: face.name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_dimensions_match_render() {
        for asset in Asset::ALL {
            let composition = asset.render(&FontFace::Builtin);
            assert_eq!(
                (composition.canvas.width(), composition.canvas.height()),
                asset.dimensions()
            );
        }
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Asset::Logo.file_name(), "logo.png");
        assert_eq!(Asset::OgImage.file_name(), "og-image.png");
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = tempdir().unwrap();
        let built = generate(Asset::Logo, dir.path(), &FontFace::Builtin).unwrap();

        assert_eq!(built.path, dir.path().join("logo.png"));
        assert_eq!((built.width, built.height), (512, 512));
        assert_eq!(built.font, "built-in bitmap");
        assert!(built.path.exists());
    }

    #[test]
    fn test_background_at_clamps() {
        let composition = Asset::OgImage.render(&FontFace::Builtin);
        assert_eq!(composition.background_at(-5), composition.background_at(0));
        assert_eq!(composition.background_at(10_000), composition.background_at(629));
    }

    #[test]
    fn test_serialize_asset_name() {
        assert_eq!(serde_json::to_string(&Asset::OgImage).unwrap(), "\"og-image\"");
    }
}
