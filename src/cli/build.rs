//! Build command implementation.
//!
//! Renders brand assets and writes them as PNG files.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::assets::{generate, Asset, BuiltAsset};
use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::render::{FontFace, FontResolver, FontSource};

/// Build brand images
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Output directory [default: from brand.yaml, else public]
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Preferred font file or name, tried before the system fonts (repeatable)
    #[arg(long = "font", value_name = "FONT")]
    pub fonts: Vec<String>,

    /// Print a JSON build report to stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: BuildArgs, assets: &[Asset], printer: &Printer) -> Result<()> {
    let manifest = Manifest::discover(Path::new("."))?;
    let output = args.output.clone().unwrap_or_else(|| manifest.output.clone());
    let face = resolve_face(&args.fonts, &manifest, printer);

    let built = build_assets(assets, &output, &face, printer)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&built)?);
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(built.len(), "image", "images"),
            printer.cyan(&display_path(&output))
        ),
    );

    Ok(())
}

/// Render and write each asset in order.
pub fn build_assets(
    assets: &[Asset],
    output: &Path,
    face: &FontFace,
    printer: &Printer,
) -> Result<Vec<BuiltAsset>> {
    let mut built = Vec::with_capacity(assets.len());

    for &asset in assets {
        let result = generate(asset, output, face)?;
        printer.status("Created", &format!("{}: {}", asset, display_path(&result.path)));
        printer.info("Size", &format!("{}x{} pixels", result.width, result.height));
        built.push(result);
    }

    Ok(built)
}

/// Pick the typeface for this run: CLI fonts, then manifest fonts, then
/// system defaults, then the built-in font.
pub fn resolve_face(cli_fonts: &[String], manifest: &Manifest, printer: &Printer) -> FontFace {
    let preferred = cli_fonts
        .iter()
        .map(|f| FontSource::parse(f))
        .chain(manifest.font_sources());
    let resolver = FontResolver::system_default().with_preferred(preferred);

    let face = resolver.resolve_face_with(|source, err| {
        printer.note("Skipping", &format!("font {}: {}", source, err));
    });

    if face.is_builtin() {
        printer.warning("Fallback", "no system font found, using the built-in bitmap font");
    } else {
        printer.info("Font", face.name());
    }

    face
}
