//! Validation for rendered brand assets.
//!
//! Renders a composition and checks its labels for legibility and fit. Used
//! by `brandkit validate`.

mod checks;
mod warning;

pub use checks::{LOW_CONTRAST, MIN_CONTRAST, MIN_CONTRAST_LARGE, OVERFLOW};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::assets::Composition;
use crate::output::Printer;

/// Run all checks against a rendered composition.
pub fn validate_composition(composition: &Composition) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_contrast(composition));
    result.merge(checks::check_overflow(composition));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("  {}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    {}", printer.dim(&format!("help: {}", help)));
        }
    }
}
