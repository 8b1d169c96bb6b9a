/// Paint command set for badge drawing

use resvg::tiny_skia::{self, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::config::Color;
use crate::rendering::font::bitmap_cells;
use crate::rendering::layout::Rect;

/// Cubic control distance approximating a quarter circle.
const KAPPA: f32 = 0.552_284_8;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FillRoundedRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        rgba: Color,
    },
    StrokeRoundedRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        stroke_width: f32,
        rgba: Color,
    },
    /// Built-in bitmap font text; each font pixel becomes a `scale` square.
    BitmapText {
        x: i32,
        y: i32,
        scale: u32,
        text: String,
        rgba: Color,
    },
}

impl PaintCommand {
    pub fn fill_rounded(rect: Rect, radius: f32, rgba: Color) -> Self {
        PaintCommand::FillRoundedRect {
            x: rect.x as f32,
            y: rect.y as f32,
            width: rect.width as f32,
            height: rect.height as f32,
            radius,
            rgba,
        }
    }
}

/// Build a rounded rectangle outline; the radius is clamped to half the
/// shorter side.
pub fn rounded_rect_path(x: f32, y: f32, w: f32, h: f32, radius: f32) -> Option<tiny_skia::Path> {
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let r = radius.max(0.0).min(w / 2.0).min(h / 2.0);
    if r == 0.0 {
        return Some(PathBuilder::from_rect(tiny_skia::Rect::from_xywh(x, y, w, h)?));
    }
    let k = r * KAPPA;
    let (right, bottom) = (x + w, y + h);

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(right - r, y);
    pb.cubic_to(right - r + k, y, right, y + r - k, right, y + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(x + r, bottom);
    pb.cubic_to(x + r - k, bottom, x, bottom - r + k, x, bottom - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}

fn solid(rgba: Color, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(rgba.to_skia());
    paint.anti_alias = anti_alias;
    paint
}

/// Execute a single command against `pixmap`. Degenerate geometry draws nothing.
pub fn paint(pixmap: &mut Pixmap, cmd: &PaintCommand) {
    match cmd {
        PaintCommand::FillRoundedRect { x, y, width, height, radius, rgba } => {
            if let Some(path) = rounded_rect_path(*x, *y, *width, *height, *radius) {
                pixmap.fill_path(&path, &solid(*rgba, true), FillRule::Winding, Transform::identity(), None);
            }
        }
        PaintCommand::StrokeRoundedRect { x, y, width, height, radius, stroke_width, rgba } => {
            if let Some(path) = rounded_rect_path(*x, *y, *width, *height, *radius) {
                let stroke = Stroke {
                    width: *stroke_width,
                    ..Stroke::default()
                };
                pixmap.stroke_path(&path, &solid(*rgba, true), &stroke, Transform::identity(), None);
            }
        }
        PaintCommand::BitmapText { x, y, scale, text, rgba } => {
            let paint = solid(*rgba, false);
            let s = *scale as f32;
            for (cx, cy) in bitmap_cells(text) {
                let px = *x as f32 + cx as f32 * s;
                let py = *y as f32 + cy as f32 * s;
                if let Some(rect) = tiny_skia::Rect::from_xywh(px, py, s, s) {
                    pixmap.fill_rect(rect, &paint, Transform::identity(), None);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(p: &Pixmap, x: u32, y: u32) -> u8 {
        p.pixel(x, y).unwrap().alpha()
    }

    #[test]
    fn fill_rounded_rect_leaves_corners_clear() {
        let mut p = Pixmap::new(32, 32).unwrap();
        paint(&mut p, &PaintCommand::fill_rounded(Rect::square(32), 8.0, Color::rgb(0, 0, 0)));
        assert_eq!(alpha_at(&p, 0, 0), 0);
        assert_eq!(alpha_at(&p, 31, 31), 0);
        assert_eq!(alpha_at(&p, 16, 16), 255);
        assert_eq!(alpha_at(&p, 16, 0), 255);
    }

    #[test]
    fn bitmap_text_fills_scaled_cells() {
        let mut p = Pixmap::new(16, 16).unwrap();
        paint(
            &mut p,
            &PaintCommand::BitmapText { x: 1, y: 1, scale: 2, text: "-".into(), rgba: Color::WHITE },
        );
        // '-' is row 3, columns 0..5
        assert_eq!(alpha_at(&p, 1, 7), 255);
        assert_eq!(alpha_at(&p, 10, 8), 255);
        assert_eq!(alpha_at(&p, 11, 7), 0);
        assert_eq!(alpha_at(&p, 1, 1), 0);
    }

    #[test]
    fn degenerate_rect_has_no_path() {
        assert!(rounded_rect_path(0.0, 0.0, 0.0, 10.0, 2.0).is_none());
        assert!(rounded_rect_path(0.0, 0.0, 10.0, 10.0, 0.0).is_some());
    }
}
