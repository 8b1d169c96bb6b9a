//! Multi-resolution `favicon.ico` packaging.
//!
//! Frames of 32px and below are drawn directly with the built-in bitmap font.
//! Larger frames go through the full badge renderer and an intermediate PNG
//! that is read back and removed again. Every frame is flattened onto opaque
//! white before it is added to the container.

use std::fs;
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{Rgba, RgbaImage};
use log::{debug, info};
use resvg::tiny_skia::Pixmap;

use crate::rendering::font::builtin_has_ink;
use crate::rendering::layout::{favicon_corner_radius, Rect};
use crate::rendering::paint::{paint, PaintCommand};
use crate::rendering::raster::{centered_bitmap_text, new_canvas, render_badge_png};
use crate::rendering::BadgeStyle;
use crate::{AssetKind, GeneratedAsset, Result};

/// Frame sizes stored in the container, smallest first.
pub const FAVICON_SIZES: [u32; 4] = [16, 32, 48, 64];

/// Largest frame drawn with the simplified path.
pub const SMALL_FRAME_MAX: u32 = 32;

/// Render one opaque, white-backed favicon frame.
///
/// `scratch_dir` receives the intermediate PNG for frames above
/// [`SMALL_FRAME_MAX`]; the file is gone when this returns, on success or
/// error.
pub fn render_favicon_frame(size: u32, text: &str, style: &BadgeStyle, scratch_dir: &Path) -> Result<RgbaImage> {
    let frame = if size <= SMALL_FRAME_MAX {
        pixmap_to_rgba(&render_small_frame(size, text, style)?)
    } else {
        debug!("favicon {size}px: full badge via intermediate PNG");
        let temp = tempfile::Builder::new()
            .prefix(&format!("temp_{size}"))
            .suffix(".png")
            .tempfile_in(scratch_dir)?;
        let raster = render_badge_png(size, text, style)?;
        fs::write(temp.path(), &raster.png_data)?;
        debug!("favicon {size}px: staged {}", temp.path().display());
        let decoded = image::open(temp.path())?.to_rgba8();
        temp.close()?;
        decoded
    };
    Ok(flatten_on_white(&frame))
}

fn render_small_frame(size: u32, text: &str, style: &BadgeStyle) -> Result<Pixmap> {
    let mut pixmap = new_canvas(size)?;
    let radius = favicon_corner_radius(size) as f32;
    let canvas = Rect::square(size);
    paint(&mut pixmap, &PaintCommand::fill_rounded(canvas, radius, style.background));

    let label = if builtin_has_ink(text) {
        centered_bitmap_text(size, text, 1, style.foreground)
    } else {
        None
    };
    match label {
        Some(cmd) => {
            debug!("favicon {size}px: built-in font label");
            paint(&mut pixmap, &cmd);
        }
        None => {
            debug!("favicon {size}px: label has no glyphs, drawing inset square");
            let inner = PaintCommand::fill_rounded(canvas.inset(2), radius - 1.0, style.foreground);
            paint(&mut pixmap, &inner);
        }
    }
    Ok(pixmap)
}

fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img
}

/// Composite `img` over opaque white; the result has alpha 255 everywhere.
pub fn flatten_on_white(img: &RgbaImage) -> RgbaImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        let a = px[3] as u32;
        for c in 0..3 {
            px[c] = ((px[c] as u32 * a + 255 * (255 - a) + 127) / 255) as u8;
        }
        px[3] = 255;
    }
    out
}

/// Encode all [`FAVICON_SIZES`] frames into ICO bytes.
pub fn build_favicon(text: &str, style: &BadgeStyle, scratch_dir: &Path) -> Result<Vec<u8>> {
    let mut dir = IconDir::new(ResourceType::Icon);
    for size in FAVICON_SIZES {
        let frame = render_favicon_frame(size, text, style, scratch_dir)?;
        let image = IconImage::from_rgba_data(size, size, frame.into_raw());
        dir.add_entry(IconDirEntry::encode(&image)?);
    }
    let mut bytes = Vec::new();
    dir.write(&mut bytes)?;
    Ok(bytes)
}

/// Write the multi-resolution favicon to `path`.
///
/// Intermediate frames are staged next to `path`.
pub fn write_favicon(path: &Path, text: &str, style: &BadgeStyle) -> Result<GeneratedAsset> {
    let scratch_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let bytes = build_favicon(text, style, scratch_dir)?;
    fs::write(path, &bytes)?;
    info!("wrote {} ({} frames)", path.display(), FAVICON_SIZES.len());
    Ok(GeneratedAsset::new(
        path,
        AssetKind::Ico,
        FAVICON_SIZES.iter().map(|&s| (s, s)).collect(),
        &bytes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Color;

    fn style() -> BadgeStyle {
        BadgeStyle::builtin_only(Color::rgb(0, 0, 0), Color::rgb(0x00, 0xe6, 0x76))
    }

    #[test]
    fn flatten_on_white_removes_alpha() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        let out = flatten_on_white(&img);
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(out.get_pixel(1, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn small_frame_with_unsupported_label_draws_inset_square() {
        let p = render_small_frame(16, "日本", &style()).unwrap();
        let centre = p.pixel(8, 8).unwrap().demultiply();
        assert_eq!((centre.red(), centre.green(), centre.blue()), (0x00, 0xe6, 0x76));
        // The 2px margin keeps the background color.
        let edge = p.pixel(1, 8).unwrap();
        assert_eq!((edge.red(), edge.green(), edge.blue(), edge.alpha()), (0, 0, 0, 255));
    }

    #[test]
    fn small_frame_draws_label_in_foreground() {
        let p = render_small_frame(32, "KTMS", &style()).unwrap();
        let has_fg = p.pixels().iter().any(|px| {
            let c = px.demultiply();
            (c.red(), c.green(), c.blue(), c.alpha()) == (0x00, 0xe6, 0x76, 0xff)
        });
        assert!(has_fg);
    }

    #[test]
    fn large_frame_leaves_no_intermediate_file() {
        let dir = tempfile::tempdir().unwrap();
        let frame = render_favicon_frame(48, "KTMS", &style(), dir.path()).unwrap();
        assert_eq!(frame.dimensions(), (48, 48));
        assert!(frame.pixels().all(|p| p[3] == 255));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn failed_large_frame_still_removes_intermediate_file() {
        let dir = tempfile::tempdir().unwrap();
        // Too large to allocate; fails after the intermediate file exists.
        let err = render_favicon_frame(600_000_000, "KTMS", &style(), dir.path()).unwrap_err();
        assert!(matches!(err, crate::Error::Render(_)), "unexpected error: {err:?}");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
