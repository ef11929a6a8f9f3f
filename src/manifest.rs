//! Project manifest (brand.yaml) parsing.
//!
//! The manifest is optional. It only controls where assets are written and
//! which fonts are preferred; brand colours and layout are fixed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BrandError, Result};
use crate::render::FontSource;

/// Manifest file name looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "brand.yaml";

/// Project manifest loaded from brand.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Output directory for generated images.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Preferred fonts, tried before the system defaults. Entries containing
    /// a path separator are files; bare names are searched for.
    pub fonts: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("public")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            fonts: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a brand.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BrandError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `brand.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| BrandError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Preferred font candidates in manifest order.
    pub fn font_sources(&self) -> Vec<FontSource> {
        self.fonts.iter().map(|f| FontSource::parse(f)).collect()
    }

    /// Render the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| BrandError::Parse {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }
}
