//! Init command implementation.
//!
//! Writes a starter `brand.yaml` with the default settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{BrandError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};

/// Write a starter brand.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write brand.yaml into
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing brand.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(BrandError::Io {
            path: manifest_path,
            message: format!("{} already exists", MANIFEST_FILENAME),
        });
    }

    let yaml = starter_yaml()?;
    fs::write(&manifest_path, yaml).map_err(|e| BrandError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));
    Ok(())
}

fn starter_yaml() -> Result<String> {
    let mut yaml = String::from("# brandkit settings\n");
    yaml.push_str(&Manifest::default().to_yaml()?);
    yaml.push_str("# Fonts tried before the system defaults, e.g.\n");
    yaml.push_str("# fonts:\n#   - fonts/Inter-Bold.ttf\n#   - Raleway.ttf\n");
    Ok(yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_parseable_manifest() {
        let dir = tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::new()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: keep\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        assert!(run(args, &Printer::new()).is_err());

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::new()).unwrap();
        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.output, PathBuf::from("public"));
    }
}
