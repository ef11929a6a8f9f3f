//! Validate command implementation.
//!
//! Renders each asset in memory and checks its labels without writing files.

use std::path::Path;

use clap::Args;

use crate::assets::Asset;
use crate::error::{BrandError, Result};
use crate::manifest::Manifest;
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_composition, ValidationResult};

use super::build::resolve_face;

/// Check label contrast and fit without writing files
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Preferred font file or name, tried before the system fonts (repeatable)
    #[arg(long = "font", value_name = "FONT")]
    pub fonts: Vec<String>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::discover(Path::new("."))?;
    let face = resolve_face(&args.fonts, &manifest, printer);

    let mut total = ValidationResult::new();
    for asset in Asset::ALL {
        let result = validate_composition(&asset.render(&face));
        printer.status("Checked", &format!("{}", asset));
        total.merge(result);
    }

    print_diagnostics(&total, printer);

    let errors = total.error_count();
    let warnings = total.warning_count();
    if errors > 0 {
        printer.error(
            "Failed",
            &format!(
                "{}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
        return Err(BrandError::Validation {
            message: format!("{} found", plural(errors, "problem", "problems")),
            help: Some("See the diagnostics above".to_string()),
        });
    }

    if warnings > 0 {
        printer.warning("Passed", &format!("with {}", plural(warnings, "warning", "warnings")));
    } else {
        printer.status("Passed", "no problems found");
    }

    Ok(())
}
