//! Vector badge emitter.
//!
//! The SVG variant is a fixed 512x512 document; text is centered
//! declaratively, so nothing is measured here.

use std::fs;
use std::path::Path;

use log::info;

use crate::config::Color;
use crate::{AssetKind, GeneratedAsset, Result};

pub const SVG_SIZE: u32 = 512;
pub const SVG_CORNER_RADIUS: u32 = 128;
pub const SVG_FONT_SIZE: u32 = 120;

/// Escape text for use in XML character data and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build the SVG markup for a badge.
pub fn badge_svg(text: &str, background: Color, foreground: Color) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <style>
      .squircle {{
        fill: {background};
        stroke: {foreground};
        stroke-width: 2;
      }}
      .text {{
        fill: {foreground};
        font-family: Arial, Helvetica, sans-serif;
        font-size: {font_size}px;
        font-weight: bold;
        text-anchor: middle;
        dominant-baseline: central;
      }}
    </style>
  </defs>

  <!-- Squircle background -->
  <rect x="0" y="0" width="{size}" height="{size}" rx="{radius}" ry="{radius}" class="squircle"/>

  <!-- Text -->
  <text x="{center}" y="{center}" class="text">{label}</text>
</svg>"#,
        size = SVG_SIZE,
        radius = SVG_CORNER_RADIUS,
        font_size = SVG_FONT_SIZE,
        center = SVG_SIZE / 2,
        label = escape_xml(text),
    )
}

/// Write the SVG badge to `path`.
pub fn write_badge_svg(path: &Path, text: &str, background: Color, foreground: Color) -> Result<GeneratedAsset> {
    let svg = badge_svg(text, background, foreground);
    fs::write(path, svg.as_bytes())?;
    info!("wrote {} (SVG)", path.display());
    Ok(GeneratedAsset::new(
        path,
        AssetKind::Svg,
        vec![(SVG_SIZE, SVG_SIZE)],
        svg.as_bytes(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_contains_shape_and_label() {
        let svg = badge_svg("KTMS", Color::rgb(0, 0, 0), Color::rgb(0x00, 0xe6, 0x76));
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="512" height="512" viewBox="0 0 512 512""#));
        assert!(svg.contains(r#"rx="128" ry="128""#));
        assert!(svg.contains("fill: #000000;"));
        assert!(svg.contains("stroke: #00E676;"));
        assert!(svg.contains("font-size: 120px;"));
        assert!(svg.contains("font-weight: bold;"));
        assert!(svg.contains(r#"<text x="256" y="256" class="text">KTMS</text>"#));
    }

    #[test]
    fn label_is_escaped() {
        let svg = badge_svg("A&<B>", Color::WHITE, Color::WHITE);
        assert!(svg.contains(">A&amp;&lt;B&gt;</text>"));
    }

    #[test]
    fn svg_parses_as_a_512_canvas() {
        let svg = badge_svg("KTMS", Color::rgb(0, 0, 0), Color::WHITE);
        let tree = resvg::usvg::Tree::from_str(&svg, &resvg::usvg::Options::default()).unwrap();
        assert_eq!(tree.size().width(), 512.0);
        assert_eq!(tree.size().height(), 512.0);
    }
}
