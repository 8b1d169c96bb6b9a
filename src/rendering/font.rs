//! Font resolution and text measurement.
//!
//! Badge text comes from one of two places: the first system font file that
//! exists in the configured candidate list, or a small built-in 5x7 bitmap
//! font. A missing or unreadable font file is never an error; the caller
//! always ends up with something it can draw.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};
use resvg::{tiny_skia, usvg};

use crate::config::Color;
use crate::rendering::layout::GlyphLayout;
use crate::svg::escape_xml;

/// Where badge glyphs come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A TrueType/OpenType file (or collection) on disk
    System(PathBuf),
    /// The built-in bitmap font
    Builtin,
}

/// Pick the first candidate that exists on disk, else the built-in font.
pub fn resolve_font(candidates: &[PathBuf]) -> FontSource {
    match candidates.iter().find(|p| p.is_file()) {
        Some(path) => {
            debug!("using system font {}", path.display());
            FontSource::System(path.clone())
        }
        None => {
            debug!("no system font found among {} candidates, using built-in font", candidates.len());
            FontSource::Builtin
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in bitmap font
// ---------------------------------------------------------------------------

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal distance between glyph origins, in unscaled pixels.
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Rows top to bottom, bit 4 is the leftmost column.
fn glyph_rows(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ' ' => [0; 7],
        '.' => [0, 0, 0, 0, 0, 0b01100, 0b01100],
        ',' => [0, 0, 0, 0, 0b01100, 0b00100, 0b01000],
        '-' => [0, 0, 0, 0b11111, 0, 0, 0],
        '_' => [0, 0, 0, 0, 0, 0, 0b11111],
        '+' => [0, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0],
        '/' => [0, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0],
        ':' => [0, 0b01100, 0b01100, 0, 0b01100, 0b01100, 0],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100],
        '&' => [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        '#' => [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        '@' => [0b01110, 0b10001, 0b00001, 0b01101, 0b10101, 0b10101, 0b01110],
        _ => return None,
    };
    Some(rows)
}

/// Set cells of `text` in unscaled pixels, relative to the run origin.
///
/// Unsupported characters keep their advance but draw nothing.
pub fn bitmap_cells(text: &str) -> Vec<(u32, u32)> {
    let mut cells = Vec::new();
    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph_rows(c) else { continue };
        let origin = i as u32 * GLYPH_ADVANCE;
        for (y, row) in rows.iter().enumerate() {
            for x in 0..GLYPH_WIDTH {
                if row & (1 << (GLYPH_WIDTH - 1 - x)) != 0 {
                    cells.push((origin + x, y as u32));
                }
            }
        }
    }
    cells
}

/// Whether the built-in font can put any ink on the canvas for `text`.
pub fn builtin_has_ink(text: &str) -> bool {
    !bitmap_cells(text).is_empty()
}

/// Integer scale giving a cap height of roughly 70% of `font_size`.
pub fn builtin_scale(font_size: f32) -> u32 {
    ((font_size * 0.7) / GLYPH_HEIGHT as f32).floor().max(1.0) as u32
}

/// Tight ink box of `text` drawn with the built-in font at `scale`.
pub fn measure_builtin(text: &str, scale: u32) -> Option<GlyphLayout> {
    let cells = bitmap_cells(text);
    let min_x = cells.iter().map(|c| c.0).min()?;
    let max_x = cells.iter().map(|c| c.0).max()?;
    let min_y = cells.iter().map(|c| c.1).min()?;
    let max_y = cells.iter().map(|c| c.1).max()?;
    Some(GlyphLayout {
        x: (min_x * scale) as f32,
        y: (min_y * scale) as f32,
        width: ((max_x - min_x + 1) * scale) as f32,
        height: ((max_y - min_y + 1) * scale) as f32,
    })
}

// ---------------------------------------------------------------------------
// Outline text from a font file
// ---------------------------------------------------------------------------

/// A label converted to outlines, ready to be composited onto a badge.
pub struct OutlineText {
    tree: usvg::Tree,
    /// Tight ink box in the coordinates of `tree`
    pub layout: GlyphLayout,
}

impl OutlineText {
    /// Shape `text` with the font at `path`.
    ///
    /// Returns `None` when the file cannot be loaded or produces no outlines
    /// for `text`; callers fall back to the built-in font.
    pub fn shape(path: &Path, text: &str, font_size: f32, canvas: u32, color: Color) -> Option<Self> {
        let mut db = usvg::fontdb::Database::new();
        if let Err(e) = db.load_font_file(path) {
            warn!("failed to read font {}: {}", path.display(), e);
            return None;
        }
        let family = match db.faces().next().and_then(|f| f.families.first()) {
            Some((name, _)) => name.clone(),
            None => {
                warn!("{} contains no usable font faces", path.display());
                return None;
            }
        };
        db.set_sans_serif_family(family.clone());
        db.set_serif_family(family);

        let opt = usvg::Options {
            fontdb: Arc::new(db),
            ..Default::default()
        };

        // Anchor near the middle so the measured run stays on the canvas.
        let half = canvas as f32 / 2.0;
        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{canvas}" height="{canvas}"><text x="{half}" y="{half}" font-family="sans-serif" font-size="{font_size}" text-anchor="middle" fill="rgb({r},{g},{b})" fill-opacity="{alpha}">{label}</text></svg>"#,
            r = color.r,
            g = color.g,
            b = color.b,
            alpha = color.a as f32 / 255.0,
            label = escape_xml(text),
        );

        let tree = match usvg::Tree::from_str(&svg, &opt) {
            Ok(tree) => tree,
            Err(e) => {
                warn!("failed to shape label with {}: {}", path.display(), e);
                return None;
            }
        };

        let bounds = find_text(tree.root())?.flattened().abs_bounding_box();
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            debug!("{} produced no ink for {:?}", path.display(), text);
            return None;
        }

        Some(OutlineText {
            layout: GlyphLayout {
                x: bounds.x(),
                y: bounds.y(),
                width: bounds.width(),
                height: bounds.height(),
            },
            tree,
        })
    }

    /// Composite the outlines onto `pixmap`, shifted by `(dx, dy)`.
    pub fn draw(&self, pixmap: &mut tiny_skia::Pixmap, dx: f32, dy: f32) {
        resvg::render(
            &self.tree,
            tiny_skia::Transform::from_translate(dx, dy),
            &mut pixmap.as_mut(),
        );
    }
}

fn find_text(group: &usvg::Group) -> Option<&usvg::Text> {
    group.children().iter().find_map(|node| match node {
        usvg::Node::Text(text) => Some(&**text),
        usvg::Node::Group(g) => find_text(g),
        _ => None,
    })
}
