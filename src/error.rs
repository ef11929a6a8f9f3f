use miette::Diagnostic;
use thiserror::Error;

/// Main error type for brandkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum BrandError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(brandkit::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(brandkit::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(brandkit::json))]
    Json(#[from] serde_json::Error),

    #[error("Font error: {message}")]
    #[diagnostic(code(brandkit::font))]
    Font { message: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(brandkit::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BrandError>;
