use std::fmt::Write;

use clap::Args;

use crate::error::{BrandError, Result};
use crate::output::{plural, Printer};
use crate::types::{BrandPalette, Colour};

/// Print the brand palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Print only this colour (`accent` or `$accent`)
    pub name: Option<String>,

    /// Also print decimal RGB values
    #[arg(long)]
    pub rgb: bool,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let palette = BrandPalette::brand();

    if let Some(name) = &args.name {
        let colour = lookup(&palette, name)?;
        // Palette lines go to stdout
        println!("{}", format_colour(name.trim_start_matches('$'), colour, args.rgb));
        return Ok(());
    }

    printer.status("Listing", &plural(palette.len(), "colour", "colours"));
    print!("{}", format_palette(&palette, args.rgb));

    Ok(())
}

/// Find a colour by name, listing the known names when there is none.
pub fn lookup(palette: &BrandPalette, name: &str) -> Result<Colour> {
    palette.get(name).ok_or_else(|| {
        let names: Vec<_> = palette.iter().map(|(n, _)| n).collect();
        BrandError::Parse {
            message: format!("Unknown colour: {}", name),
            help: Some(format!("Known colours: {}", names.join(", "))),
        }
    })
}

fn format_colour(name: &str, colour: Colour, rgb: bool) -> String {
    let mut out = format!("${}: {}", name, colour);
    if rgb {
        let _ = write!(out, "  rgb({}, {}, {})", colour.r, colour.g, colour.b);
    }
    out
}

/// One `$name: #RRGGBB` line per colour.
pub fn format_palette(palette: &BrandPalette, rgb: bool) -> String {
    let mut out = String::new();
    for (name, colour) in palette.iter() {
        out.push_str(&format_colour(name, colour, rgb));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_palette() {
        insta::assert_snapshot!(format_palette(&BrandPalette::brand(), false).trim_end(), @r"
        $primary: #1E3A5F
        $primary-dark: #152B47
        $primary-light: #2D5A8E
        $accent: #D4A853
        $accent-dark: #B8923D
        $accent-light: #E6C680
        $white: #FFFFFF
        $muted: #C8C8C8
        ");
    }

    #[test]
    fn test_format_palette_rgb() {
        let out = format_palette(&BrandPalette::brand(), true);
        assert!(out.contains("$accent: #D4A853  rgb(212, 168, 83)"));
    }

    #[test]
    fn test_lookup_by_name() {
        let palette = BrandPalette::brand();
        assert_eq!(lookup(&palette, "accent").unwrap(), Colour::rgb(212, 168, 83));
        assert_eq!(lookup(&palette, "$muted").unwrap(), Colour::rgb(200, 200, 200));
        assert_eq!(format_colour("accent", Colour::rgb(212, 168, 83), false), "$accent: #D4A853");
    }

    #[test]
    fn test_lookup_unknown() {
        let err = lookup(&BrandPalette::brand(), "teal").unwrap_err();
        assert_eq!(err.to_string(), "Parse error: Unknown colour: teal");
        match err {
            BrandError::Parse { help: Some(help), .. } => assert!(help.contains("primary-dark")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
