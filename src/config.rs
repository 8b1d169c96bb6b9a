//! Generator configuration: label, colors, output layout and font candidates.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::{Error, Result};

/// An 8-bit RGBA color, written as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub fn to_skia(self) -> resvg::tiny_skia::Color {
        resvg::tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| Error::Config(format!("color must start with '#': {s:?}")))?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(Error::Config(format!(
                "color must be #RRGGBB or #RRGGBBAA: {s:?}"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| Error::Config(format!("invalid hex digits in color {s:?}")))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 0xff };
        Ok(Color {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Configuration for a generation run
///
/// The defaults reproduce the fixed asset set: a `KTMS` badge in
/// `#00E676` on `#000000`, written under `web/` and `web/icons/`.
///
/// # Examples
///
/// ```
/// let cfg = iconsmith::IconConfig::default();
/// assert_eq!(cfg.label, "KTMS");
/// assert_eq!(cfg.foreground.to_string(), "#00E676");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Text drawn on every badge
    pub label: String,
    /// Fill of the rounded square
    pub background: Color,
    /// Border stroke and text color
    pub foreground: Color,
    /// Directory receiving the favicons, relative to the run root
    pub web_dir: PathBuf,
    /// Directory receiving the app icons, relative to the run root
    pub icons_dir: PathBuf,
    /// System font files tried in order before the built-in bitmap font
    pub font_candidates: Vec<PathBuf>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            label: "KTMS".to_string(),
            background: Color::rgb(0x00, 0x00, 0x00),
            foreground: Color::rgb(0x00, 0xe6, 0x76),
            web_dir: PathBuf::from("web"),
            icons_dir: PathBuf::from("web").join("icons"),
            font_candidates: default_font_candidates(),
        }
    }
}

impl IconConfig {
    /// Load overrides from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let cfg: IconConfig = serde_json::from_str(&data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.web_dir.as_os_str().is_empty() || self.icons_dir.as_os_str().is_empty() {
            return Err(Error::Config("output directories must not be empty".into()));
        }
        Ok(())
    }
}

/// Well-known system font locations (macOS, Windows, Linux).
pub fn default_font_candidates() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "C:/Windows/Fonts/arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}
