//! PNG output for finished canvases.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{BrandError, Result};

use super::Canvas;

/// Write a canvas to a PNG file, replacing any existing file.
///
/// Missing parent directories are created. Encoding always uses the best
/// compression with adaptive filtering, so output bytes are deterministic.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let io_err = |message: String| BrandError::Io {
        path: path.to_path_buf(),
        message,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| io_err(format!("Failed to create output directory: {}", e)))?;
    }

    let file = File::create(path).map_err(|e| io_err(format!("Failed to create file: {}", e)))?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Best,
        FilterType::Adaptive,
    );

    let image = canvas.as_image();
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| io_err(format!("Failed to write PNG: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_simple() {
        let mut canvas = Canvas::new(2, 2, Colour::BLACK);
        canvas.put(1, 0, Colour::WHITE);

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&canvas, &path).unwrap();

        assert!(path.exists());

        // Read back and verify
        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_write_png_is_rgb() {
        let canvas = Canvas::new(3, 1, Colour::rgb(1, 2, 3));
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgb.png");

        write_png(&canvas, &path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn test_write_png_creates_parent_dirs() {
        let canvas = Canvas::new(1, 1, Colour::BLACK);
        let dir = tempdir().unwrap();
        let path = dir.path().join("public").join("nested").join("out.png");

        write_png(&canvas, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_png_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        write_png(&Canvas::new(1, 1, Colour::BLACK), &path).unwrap();
        write_png(&Canvas::new(1, 1, Colour::WHITE), &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_write_png_deterministic_bytes() {
        let mut canvas = Canvas::new(16, 16, Colour::rgb(21, 43, 71));
        canvas.put(3, 3, Colour::WHITE);

        let dir = tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        write_png(&canvas, &a).unwrap();
        write_png(&canvas, &b).unwrap();

        assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
    }

    #[test]
    fn test_write_png_unwritable_path() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();

        let err = write_png(&Canvas::new(1, 1, Colour::BLACK), &blocker.join("out.png"));
        assert!(matches!(err, Err(BrandError::Io { .. })));
    }
}
