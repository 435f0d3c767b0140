//! Presets command implementation.
//!
//! Prints the canvas presets, one per line, to stdout.

use clap::Args;

use crate::error::Result;
use crate::types::CanvasPreset;

/// List the canvas size presets
#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Viewport used to size the fullscreen preset, as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_viewport, default_value = "1280x720")]
    pub viewport: (u32, u32),
}

pub fn run(args: PresetsArgs) -> Result<()> {
    print!("{}", preset_table(args.viewport));
    Ok(())
}

/// One `name  WIDTHxHEIGHT` line per preset.
pub fn preset_table(viewport: (u32, u32)) -> String {
    let mut out = String::new();
    for preset in CanvasPreset::ALL {
        let (w, h) = preset.resolve(viewport);
        let note = if preset.fixed_size().is_none() {
            " (viewport)"
        } else {
            ""
        };
        out.push_str(&format!("{:<12}{}x{}{}\n", preset.name(), w, h, note));
    }
    out
}

/// Parse `WIDTHxHEIGHT`.
pub fn parse_viewport(s: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let w: u32 = w.trim().parse().map_err(|_| format!("invalid width '{}'", w))?;
    let h: u32 = h.trim().parse().map_err(|_| format!("invalid height '{}'", h))?;
    if w == 0 || h == 0 {
        return Err("viewport must be non-empty".to_string());
    }
    Ok((w, h))
}
