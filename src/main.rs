use clap::Parser;
use miette::Result;
use brandkit::assets::Asset;
use brandkit::cli::{Cli, Commands};
use brandkit::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbose(cli.verbose);

    match cli.command.unwrap_or_default() {
        Commands::Build(args) => brandkit::cli::build::run(args, &Asset::ALL, &printer)?,
        Commands::Logo(args) => brandkit::cli::build::run(args, &[Asset::Logo], &printer)?,
        Commands::OgImage(args) => brandkit::cli::build::run(args, &[Asset::OgImage], &printer)?,
        Commands::Validate(args) => brandkit::cli::validate::run(args, &printer)?,
        Commands::Palette(args) => brandkit::cli::palette::run(args, &printer)?,
        Commands::Init(args) => brandkit::cli::init::run(args, &printer)?,
        Commands::Completions(args) => brandkit::cli::completions::run(args)?,
    }

    Ok(())
}
