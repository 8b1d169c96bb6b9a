//! Badge rendering: shapes, text and PNG encoding.

pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;

use std::path::PathBuf;

use crate::config::{default_font_candidates, Color, IconConfig};

/// Colors and font candidates shared by every badge of a run.
#[derive(Debug, Clone)]
pub struct BadgeStyle {
    pub background: Color,
    pub foreground: Color,
    pub font_candidates: Vec<PathBuf>,
}

impl BadgeStyle {
    /// A style that never looks at system fonts.
    pub fn builtin_only(background: Color, foreground: Color) -> Self {
        Self { background, foreground, font_candidates: Vec::new() }
    }
}

impl Default for BadgeStyle {
    fn default() -> Self {
        let cfg = IconConfig::default();
        Self {
            background: cfg.background,
            foreground: cfg.foreground,
            font_candidates: default_font_candidates(),
        }
    }
}

impl From<&IconConfig> for BadgeStyle {
    fn from(cfg: &IconConfig) -> Self {
        Self {
            background: cfg.background,
            foreground: cfg.foreground,
            font_candidates: cfg.font_candidates.clone(),
        }
    }
}

/// An encoded raster badge.
#[derive(Debug, Clone)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}
