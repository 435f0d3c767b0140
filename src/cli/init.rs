//! Init command implementation.
//!
//! Writes a starter session script with the default brush and a short
//! example stroke.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, StampError};
use crate::output::{display_path, Printer, StatusLine, Tone};
use crate::session::{SessionEvent, SessionScript};
use crate::types::{CanvasPreset, PointerSample};

/// Default file name for a new session script.
pub const SESSION_FILENAME: &str = "session.yaml";

/// Write a starter session script
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the script
    #[arg(default_value = SESSION_FILENAME)]
    pub path: PathBuf,

    /// Stamp image to reference
    #[arg(long, default_value = "stamp.png")]
    pub image: PathBuf,

    /// Canvas preset
    #[arg(long, default_value = "square")]
    pub canvas: CanvasPreset,

    /// Overwrite an existing script
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(StampError::Io {
            path: args.path.clone(),
            message: "already exists (use --force to overwrite)".to_string(),
        });
    }

    let script = starter_script(args.canvas, args.image);
    let yaml = serde_yaml::to_string(&script).map_err(|e| StampError::Encode {
        message: format!("Failed to serialize session: {}", e),
    })?;

    fs::write(&args.path, yaml).map_err(|e| StampError::Io {
        path: args.path.clone(),
        message: format!("Failed to write session: {}", e),
    })?;

    printer.emit(&StatusLine::new(Tone::Progress, "Created", display_path(&args.path)));
    Ok(())
}

/// A session with one diagonal stroke across the middle of the canvas.
pub fn starter_script(canvas: CanvasPreset, image: PathBuf) -> SessionScript {
    let mut script = SessionScript {
        canvas,
        seed: Some(1),
        image: Some(image),
        ..SessionScript::default()
    };

    let (w, h) = canvas.resolve(script.viewport);
    let (w, h) = (w as f32, h as f32);
    let steps = 24;

    script
        .events
        .push(SessionEvent::Down(PointerSample::new(w * 0.25, h * 0.25, 0)));
    for i in 1..=steps {
        let f = 0.25 + 0.5 * i as f32 / steps as f32;
        script.events.push(SessionEvent::Move(PointerSample::new(
            w * f,
            h * f,
            i as i64 * 16,
        )));
    }
    script.events.push(SessionEvent::Up);
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_starter_script_roundtrips() {
        let script = starter_script(CanvasPreset::Pc, PathBuf::from("x.png"));
        let yaml = serde_yaml::to_string(&script).unwrap();
        let parsed = SessionScript::parse(&yaml).unwrap();

        assert_eq!(parsed.canvas, CanvasPreset::Pc);
        assert_eq!(parsed.image, Some(PathBuf::from("x.png")));
        assert_eq!(parsed.events, script.events);
        assert_eq!(parsed.events.len(), 26);
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SESSION_FILENAME);
        fs::write(&path, "keep me").unwrap();

        let args = InitArgs {
            path: path.clone(),
            image: PathBuf::from("stamp.png"),
            canvas: CanvasPreset::Square,
            force: false,
        };
        assert!(run(args, &Printer::new()).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_init_force_writes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SESSION_FILENAME);
        fs::write(&path, "old").unwrap();

        let args = InitArgs {
            path: path.clone(),
            image: PathBuf::from("stamp.png"),
            canvas: CanvasPreset::Square,
            force: true,
        };
        run(args, &Printer::new()).unwrap();
        let script = SessionScript::load(&path).unwrap();
        assert_eq!(script.canvas, CanvasPreset::Square);
    }
}
