//! Colour and canvas background types.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StampError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse an RGB hex colour string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the leading `#`,
    /// which is what a colour picker hands back.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let rgb: Srgb<u8> = s.parse().map_err(|e| StampError::InvalidConfig {
            field: "background",
            message: format!("'{}' is not a hex colour ({})", s, e),
            help: Some("Use #RGB or #RRGGBB format".to_string()),
        })?;
        Ok(Self::rgb(rgb.red, rgb.green, rgb.blue))
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl FromStr for Colour {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = StampError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Colour> for String {
    fn from(c: Colour) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// What the surface is painted with before any stamps land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// Opaque fill in the given colour.
    Opaque(Colour),
    /// Left empty (alpha 0 everywhere).
    Transparent,
}

impl Background {
    /// Build from the two UI controls: the colour picker and the transparent toggle.
    pub fn from_controls(colour: Colour, transparent: bool) -> Self {
        if transparent {
            Background::Transparent
        } else {
            Background::Opaque(Colour { a: 255, ..colour })
        }
    }

    /// The pixel value an untouched surface pixel holds.
    pub fn fill(self) -> Colour {
        match self {
            Background::Opaque(c) => c,
            Background::Transparent => Colour::TRANSPARENT,
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::Opaque(Colour::WHITE)
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::Opaque(c) => write!(f, "{}", c),
            Background::Transparent => write!(f, "transparent"),
        }
    }
}
