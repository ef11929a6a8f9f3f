//! Validation checks for rendered compositions.

use crate::assets::Composition;

use super::warning::{Diagnostic, ValidationResult};

pub const LOW_CONTRAST: &str = "brandkit::validate::low-contrast";
pub const OVERFLOW: &str = "brandkit::validate::overflow";

/// WCAG AA minimum for body text.
pub const MIN_CONTRAST: f32 = 4.5;
/// WCAG AA minimum for large text; anything below is unreadable.
pub const MIN_CONTRAST_LARGE: f32 = 3.0;

/// Check each label's contrast against the gradient behind its middle row.
pub fn check_contrast(composition: &Composition) -> ValidationResult {
    let mut result = ValidationResult::new();

    for label in &composition.labels {
        let mid = (label.bounds.top + label.bounds.bottom) / 2;
        let background = composition.background_at(mid);
        let ratio = label.colour.contrast_ratio(background);

        let message = format!(
            "{}: '{}' ({}) on {} has contrast {:.2}:1",
            composition.asset, label.text, label.colour, background, ratio
        );
        if ratio < MIN_CONTRAST_LARGE {
            result.push(
                Diagnostic::error(LOW_CONTRAST, message)
                    .with_help(format!("Contrast must be at least {}:1", MIN_CONTRAST_LARGE)),
            );
        } else if ratio < MIN_CONTRAST {
            result.push(
                Diagnostic::warning(LOW_CONTRAST, message)
                    .with_help(format!("{}:1 is recommended for body text", MIN_CONTRAST)),
            );
        }
    }

    result
}

/// Check that every label's ink stays inside the undecorated area.
pub fn check_overflow(composition: &Composition) -> ValidationResult {
    let mut result = ValidationResult::new();
    let safe = composition.safe_area;

    for label in &composition.labels {
        let b = label.bounds;
        if b.width() == 0 || b.height() == 0 {
            continue;
        }
        let inside = safe.contains(b.left, b.top) && safe.contains(b.right - 1, b.bottom - 1);
        if !inside {
            result.push(
                Diagnostic::error(
                    OVERFLOW,
                    format!(
                        "{}: '{}' spans ({}, {})..({}, {}), outside ({}, {})..({}, {})",
                        composition.asset,
                        label.text,
                        b.left,
                        b.top,
                        b.right,
                        b.bottom,
                        safe.x0,
                        safe.y0,
                        safe.x1 + 1,
                        safe.y1 + 1
                    ),
                )
                .with_help("Shorten the label or use a smaller font size"),
            );
        }
    }

    result
}
