pub mod completions;
pub mod init;
pub mod paint;
pub mod presets;

use clap::{Parser, Subcommand};

/// stampbrush - Paint with stamped copies of an image
#[derive(Parser, Debug)]
#[command(name = "stampbrush")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a session script and export the canvas as PNG
    Paint(paint::PaintArgs),

    /// Write a starter session script
    Init(init::InitArgs),

    /// List the canvas size presets
    Presets(presets::PresetsArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
