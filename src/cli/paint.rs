//! Paint command implementation.
//!
//! Replays a session script against the engine and writes the PNG export.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, replay_report, Printer, StatusLine, Tone};
use crate::render::{write_png, DEFAULT_EXPORT_NAME};
use crate::session::replay_file;

/// Replay a session script and export the canvas as PNG
#[derive(Args, Debug)]
pub struct PaintArgs {
    /// Session script (.yaml, .yml or .json)
    pub session: PathBuf,

    /// Output PNG path
    #[arg(long, short, default_value = DEFAULT_EXPORT_NAME)]
    pub output: PathBuf,

    /// Seed for jitter, overriding the script's seed
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: PaintArgs, printer: &Printer) -> Result<()> {
    printer.emit(&StatusLine::new(
        Tone::Progress,
        "Replaying",
        display_path(&args.session),
    ));

    let session = replay_file(&args.session, args.seed)?;
    printer.emit_all(&replay_report(
        &session.summary(),
        session.engine().image().is_some(),
    ));

    let bytes = session.export()?;
    write_png(&bytes, &args.output)?;

    printer.emit(&printer.export_line(&args.output, session.surface().backing_size()));
    Ok(())
}
