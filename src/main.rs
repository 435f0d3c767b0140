use clap::Parser;
use miette::Result;
use stampbrush::cli::{Cli, Commands};
use stampbrush::output::Printer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Paint(args) => stampbrush::cli::paint::run(args, &printer)?,
        Commands::Init(args) => stampbrush::cli::init::run(args, &printer)?,
        Commands::Presets(args) => stampbrush::cli::presets::run(args)?,
        Commands::Completions(args) => stampbrush::cli::completions::run(args)?,
    }

    Ok(())
}
