pub mod build;
pub mod completions;
pub mod init;
pub mod palette;
pub mod validate;

use clap::{Parser, Subcommand};

/// brandkit - Brand image generator
///
/// Run without a subcommand to build every asset.
#[derive(Parser, Debug)]
#[command(name = "brandkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show skipped font candidates and other details
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the logo and the Open Graph image
    Build(build::BuildArgs),

    /// Build only the square logo (logo.png)
    Logo(build::BuildArgs),

    /// Build only the Open Graph image (og-image.png)
    OgImage(build::BuildArgs),

    /// Check label contrast and fit without writing files
    Validate(validate::ValidateArgs),

    /// Print the brand palette
    Palette(palette::PaletteArgs),

    /// Write a starter brand.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Build(build::BuildArgs::default())
    }
}
