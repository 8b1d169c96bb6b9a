/// Rasterized badge renderer

use std::fs;
use std::path::Path;

use log::{debug, info};
use resvg::tiny_skia::Pixmap;

use crate::config::Color;
use crate::rendering::font::{builtin_scale, measure_builtin, resolve_font, FontSource, OutlineText};
use crate::rendering::layout::{badge_corner_radius, border_width, font_size};
use crate::rendering::paint::{paint, PaintCommand};
use crate::rendering::{BadgeStyle, Raster};
use crate::{AssetKind, Error, GeneratedAsset, Result};

pub(crate) fn new_canvas(size: u32) -> Result<Pixmap> {
    Pixmap::new(size, size).ok_or_else(|| Error::Render(format!("cannot allocate a {size}x{size} canvas")))
}

/// Background fill plus the inset border stroke of a full badge.
pub fn badge_shape_commands(size: u32, style: &BadgeStyle) -> Vec<PaintCommand> {
    let s = size as f32;
    let radius = badge_corner_radius(size) as f32;
    let bw = border_width(size) as f32;
    // Stroke is centered on the path; keep its outer edge `bw` inside the fill.
    let inset = bw * 1.5;
    vec![
        PaintCommand::FillRoundedRect {
            x: 0.0,
            y: 0.0,
            width: s,
            height: s,
            radius,
            rgba: style.background,
        },
        PaintCommand::StrokeRoundedRect {
            x: inset,
            y: inset,
            width: s - inset * 2.0,
            height: s - inset * 2.0,
            radius: (radius - inset).max(0.0),
            stroke_width: bw,
            rgba: style.foreground,
        },
    ]
}

/// Built-in font text centered on a `size` canvas, or `None` if `text` has
/// no drawable glyphs.
pub fn centered_bitmap_text(size: u32, text: &str, scale: u32, rgba: Color) -> Option<PaintCommand> {
    let layout = measure_builtin(text, scale)?;
    let (dx, dy) = layout.center_offset(size);
    Some(PaintCommand::BitmapText {
        x: dx as i32,
        y: dy as i32,
        scale,
        text: text.to_string(),
        rgba,
    })
}

/// Draw a `size` x `size` badge with `text` centered on a transparent canvas.
///
/// Text uses the first available system font, falling back to the built-in
/// bitmap font when none exists or the file cannot be shaped.
pub fn render_badge(size: u32, text: &str, style: &BadgeStyle) -> Result<Pixmap> {
    let mut pixmap = new_canvas(size)?;
    for cmd in badge_shape_commands(size, style) {
        paint(&mut pixmap, &cmd);
    }

    let em = font_size(size);
    let outline = match resolve_font(&style.font_candidates) {
        FontSource::System(path) => OutlineText::shape(&path, text, em, size, style.foreground),
        FontSource::Builtin => None,
    };

    match outline {
        Some(outline) => {
            let (dx, dy) = outline.layout.center_offset(size);
            outline.draw(&mut pixmap, dx, dy);
        }
        None => {
            let scale = builtin_scale(em);
            debug!("badge {size}px: built-in font at scale {scale}");
            if let Some(cmd) = centered_bitmap_text(size, text, scale, style.foreground) {
                paint(&mut pixmap, &cmd);
            }
        }
    }

    Ok(pixmap)
}

/// Render a badge and encode it as an RGBA PNG.
pub fn render_badge_png(size: u32, text: &str, style: &BadgeStyle) -> Result<Raster> {
    let pixmap = render_badge(size, text, style)?;
    let png_data = pixmap.encode_png().map_err(|e| Error::Encode(e.to_string()))?;
    Ok(Raster { width: size, height: size, png_data })
}

/// Render a badge and write it to `path` as a transparent PNG.
pub fn write_badge(path: &Path, size: u32, text: &str, style: &BadgeStyle) -> Result<GeneratedAsset> {
    let raster = render_badge_png(size, text, style)?;
    fs::write(path, &raster.png_data)?;
    info!("wrote {} ({}x{})", path.display(), raster.width, raster.height);
    Ok(GeneratedAsset::new(
        path,
        AssetKind::Png,
        vec![(raster.width, raster.height)],
        &raster.png_data,
    ))
}
