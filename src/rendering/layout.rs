/// Layout primitives for placing a label inside a square badge

/// Integer pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn square(size: u32) -> Self {
        Rect { x: 0, y: 0, width: size, height: size }
    }

    pub fn inset(&self, by: u32) -> Rect {
        Rect {
            x: self.x + by as i32,
            y: self.y + by as i32,
            width: self.width.saturating_sub(by * 2),
            height: self.height.saturating_sub(by * 2),
        }
    }
}

/// Measured ink box of a text run, relative to the origin it was measured at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphLayout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl GlyphLayout {
    /// Offset that moves the ink box to the middle of a `size` x `size` canvas.
    ///
    /// Offsets are floored so that the same measurement always lands on the
    /// same pixels.
    pub fn center_offset(&self, size: u32) -> (f32, f32) {
        let dx = ((size as f32 - self.width) / 2.0).floor() - self.x;
        let dy = ((size as f32 - self.height) / 2.0).floor() - self.y;
        (dx, dy)
    }
}

/// Corner radius of the full-size badge.
pub fn badge_corner_radius(size: u32) -> u32 {
    size / 4
}

/// Corner radius of the favicon frames, smaller than the badge's.
pub fn favicon_corner_radius(size: u32) -> u32 {
    (size / 6).max(2)
}

/// Border stroke width, never thinner than one pixel.
pub fn border_width(size: u32) -> u32 {
    (size / 48).max(1)
}

/// Nominal em size for badge text.
pub fn font_size(size: u32) -> f32 {
    (size as f32 * 0.25).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_metrics_follow_size() {
        assert_eq!(badge_corner_radius(512), 128);
        assert_eq!(badge_corner_radius(32), 8);
        assert_eq!(border_width(16), 1);
        assert_eq!(border_width(192), 4);
        assert_eq!(border_width(512), 10);
        assert_eq!(font_size(512), 128.0);
        assert_eq!(favicon_corner_radius(16), 2);
        assert_eq!(favicon_corner_radius(64), 10);
    }

    #[test]
    fn center_offset_places_box_in_middle() {
        let g = GlyphLayout { x: 2.0, y: -10.0, width: 40.0, height: 20.0 };
        let (dx, dy) = g.center_offset(100);
        assert_eq!(dx + g.x, 30.0);
        assert_eq!(dy + g.y, 40.0);
    }

    #[test]
    fn rect_inset_shrinks_both_sides() {
        let r = Rect::square(16).inset(2);
        assert_eq!(r, Rect { x: 2, y: 2, width: 12, height: 12 });
        assert_eq!(Rect::square(3).inset(2).width, 0);
    }
}
